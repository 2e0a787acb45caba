/*!
 * # Editing Core
 *
 * A small block-level document engine that hosts the image node.
 *
 * ## Architecture Overview
 *
 * ### 1. Ordered Blocks
 * - A [`Document`] is an ordered list of block [`Node`]s (paragraphs and images)
 * - Every node carries a stable [`NodeId`] that survives edits around it
 *
 * ### 2. Block-Granular Selection
 * - The selection is a `Range<usize>` of block indices
 * - An empty range is a cursor between blocks; a one-block range is a node selection
 *
 * ### 3. Transactions
 * - All edits go through [`EditorHost::dispatch`] as an ordered list of [`Step`]s
 * - [`Transaction`] is the builder: `doc.chain().focus().set_image(attrs).run()`
 * - Steps are applied to a staged copy and committed only when every step succeeds
 *
 * ### 4. Markup Round-Trip
 * - [`Document::from_html`] re-hydrates blocks from markup using the image node's parse rules
 * - [`Document::to_html`] serializes them back, computing image sources from the current options
 *
 * ## Usage Pattern
 *
 * ```rust
 * use image_block_engine::{Document, EditorHost, ImageAttributes, ImageNode, SetImage};
 *
 * let image = ImageNode::default();
 * let mut doc = Document::from_html("<p>Hello</p>", &image);
 *
 * let patch = doc
 *     .chain()
 *     .focus()
 *     .set_image(ImageAttributes::asset("abc"))
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(patch.version, 1);
 * assert_eq!(
 *     doc.to_html(&image),
 *     r#"<p>Hello</p><img data-directus-id="abc" src="/assets/abc">"#
 * );
 * ```
 */

pub mod document;
pub mod node;
pub mod patch;
pub mod transaction;

pub use document::Document;
pub use node::{Node, NodeId, NodeKind};
pub use patch::Patch;
pub use transaction::{EditorHost, Step, Transaction, TransactionError};
