use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::image::{ImageAttributes, ImageNode};

/// Stable identifier for a block that survives edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attrs", rename_all = "lowercase")]
pub enum NodeKind {
    Paragraph { text: String },
    Image(ImageAttributes),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Paragraph { .. } => "paragraph",
            NodeKind::Image(_) => ImageNode::NAME,
        }
    }
}

/// A block in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(),
            kind,
        }
    }

    pub fn image(attrs: ImageAttributes) -> Self {
        Self::new(NodeKind::Image(attrs))
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph { text: text.into() })
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn image_attributes(&self) -> Option<&ImageAttributes> {
        match &self.kind {
            NodeKind::Image(attrs) => Some(attrs),
            NodeKind::Paragraph { .. } => None,
        }
    }
}
