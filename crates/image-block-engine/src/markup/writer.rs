use super::element::{Element, MarkupNode};

/// Serialize a forest of nodes back to markup
pub fn write_fragment(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text(text) => out.push_str(&html_escape::encode_text(text)),
        MarkupNode::Element(element) => write_element(element, out),
    }
}

pub(crate) fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in element.attributes.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
