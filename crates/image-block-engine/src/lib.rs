pub mod editing;
pub mod image;
pub mod markup;
pub mod schema;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Document, EditorHost, Node, NodeId, NodeKind, Patch, Step, Transaction, TransactionError,
};
pub use image::{FILENAME_MARKER, ID_MARKER, ImageAttributes, ImageNode, ImageOptions, SetImage};
pub use markup::{Attributes, Element, MarkupNode};
pub use session::{EditSession, LibraryAsset, SaveOutcome, SessionState};
