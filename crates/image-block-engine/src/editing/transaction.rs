use std::ops::Range;

use crate::editing::{Node, Patch};
use crate::image::ImageAttributes;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("Invalid insertion position {range:?} in a document of {len} blocks")]
    InvalidPosition { range: Range<usize>, len: usize },
    #[error("Invalid selection {range:?} in a document of {len} blocks")]
    InvalidSelection { range: Range<usize>, len: usize },
}

/// One step of a transaction, applied in order
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Focus,
    SetSelection(Range<usize>),
    /// Insert a node at the selection, replacing the selected blocks
    InsertContent(Node),
}

/// The document engine surface the image node and edit session rely on
pub trait EditorHost {
    /// Whether the selection lies entirely within nodes named `node_name`
    fn is_active(&self, node_name: &str) -> bool;

    /// Attributes of the selected node named `node_name`
    fn get_attributes(&self, node_name: &str) -> Option<ImageAttributes>;

    /// Apply all steps atomically: either every step is applied or none is
    fn dispatch(&mut self, steps: Vec<Step>) -> Result<Patch, TransactionError>;

    fn chain(&mut self) -> Transaction<'_, Self>
    where
        Self: Sized,
    {
        Transaction::new(self)
    }
}

/// Builder collecting steps for a single atomic dispatch
pub struct Transaction<'a, E: EditorHost + ?Sized> {
    editor: &'a mut E,
    steps: Vec<Step>,
}

impl<'a, E: EditorHost + ?Sized> Transaction<'a, E> {
    pub fn new(editor: &'a mut E) -> Self {
        Self {
            editor,
            steps: Vec::new(),
        }
    }

    pub fn focus(mut self) -> Self {
        self.steps.push(Step::Focus);
        self
    }

    pub fn set_selection(mut self, range: Range<usize>) -> Self {
        self.steps.push(Step::SetSelection(range));
        self
    }

    pub fn insert_content(mut self, node: Node) -> Self {
        self.steps.push(Step::InsertContent(node));
        self
    }

    pub fn run(self) -> Result<Patch, TransactionError> {
        let Self { editor, steps } = self;
        editor.dispatch(steps)
    }
}
