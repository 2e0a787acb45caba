//! Declarative node schemas.
//!
//! A node type is described by a static [`NodeSpec`]: its structural
//! classification, an ordered table of [`AttributeSpec`]s and an ordered list
//! of [`ParseRule`]s. The codec iterates these tables at parse and render time,
//! so adding an attribute is a table edit rather than new control flow.

mod attribute;
mod node;
mod rule;

pub use attribute::{AttributeSpec, NodeAttrs, ParseFn, RenderFn};
pub use node::{NodeGroup, NodeSpec};
pub use rule::ParseRule;
