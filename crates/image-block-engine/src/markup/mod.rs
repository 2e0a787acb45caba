//! Markup fragments: the persisted form of document nodes.
//!
//! This is deliberately a small subset of HTML. It models elements with
//! ordered attributes and text, parses fragments tolerantly (bad markup never
//! fails, it degrades) and writes them back with attribute escaping.

mod element;
mod parser;
mod writer;

pub use element::{Attributes, Element, MarkupNode, VOID_ELEMENTS, is_void, merge_attributes};
pub use parser::parse_fragment;
pub use writer::write_fragment;
