use crate::editing::{Document, EditorHost, Node, Step};
use crate::image::{ImageAttributes, ImageNode, ImageOptions};

/// Image node rendering against a CDN base address
pub fn cdn_image_node() -> ImageNode {
    ImageNode::configure(ImageOptions::new("https://cdn.example.com/"))
}

/// Paragraph, image, paragraph with the image node-selected
pub fn document_with_selected_image(attrs: ImageAttributes) -> Document {
    let mut doc = Document::from_nodes(vec![
        Node::paragraph("before"),
        Node::image(attrs),
        Node::paragraph("after"),
    ]);
    doc.dispatch(vec![Step::SetSelection(1..2)])
        .expect("selection within document");
    doc
}
