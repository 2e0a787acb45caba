use regex::Regex;
use std::sync::OnceLock;

use super::element::{Attributes, Element, MarkupNode};

fn tag_regex() -> &'static Regex {
    // Comments, then opening/closing tags. Quotes only delimit a value right after
    // '=', so they may contain '>'; stray quotes elsewhere are plain characters.
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| {
        Regex::new(r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"'=]|=\s*"[^"]*"|=\s*'[^']*'|=|["'])*?)(/?)>"#)
            .expect("Invalid tag regex")
    })
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`][^\s<>]*)))?"#)
            .expect("Invalid attribute regex")
    })
}

/// Parse a markup fragment into a forest of nodes.
///
/// Never fails. Unclosed elements are closed at the end of their parent,
/// stray closing tags are dropped and comments are skipped. Tag and attribute
/// names are lowercased; the first occurrence of a duplicated attribute wins.
pub fn parse_fragment(input: &str) -> Vec<MarkupNode> {
    let mut builder = TreeBuilder::default();
    let mut last = 0;

    for caps in tag_regex().captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        builder.text(&input[last..whole.start()]);
        last = whole.end();

        // Comment
        let Some(tag) = caps.get(2) else {
            continue;
        };
        let tag = tag.as_str().to_ascii_lowercase();

        if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
            builder.close(&tag);
        } else {
            let attributes = parse_attributes(caps.get(3).map_or("", |m| m.as_str()));
            let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
            builder.open(Element::with_attributes(tag, attributes), self_closing);
        }
    }

    builder.text(&input[last..]);
    builder.finish()
}

fn parse_attributes(source: &str) -> Attributes {
    let mut attributes = Attributes::new();

    for caps in attribute_regex().captures_iter(source) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        if attributes.has(&name) {
            continue;
        }

        let raw = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());
        attributes.set(name, html_escape::decode_html_entities(raw));
    }

    attributes
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<MarkupNode>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn push(&mut self, node: MarkupNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(raw).into_owned();
        self.push(MarkupNode::Text(decoded));
    }

    fn open(&mut self, element: Element, self_closing: bool) {
        if self_closing || element.is_void() {
            self.push(MarkupNode::Element(element));
        } else {
            self.open.push(element);
        }
    }

    fn close(&mut self, tag: &str) {
        let Some(depth) = self.open.iter().rposition(|element| element.tag == tag) else {
            log::debug!("Ignoring stray closing tag </{tag}>");
            return;
        };

        while self.open.len() > depth {
            if let Some(element) = self.open.pop() {
                self.push(MarkupNode::Element(element));
            }
        }
    }

    fn finish(mut self) -> Vec<MarkupNode> {
        while let Some(element) = self.open.pop() {
            log::debug!("Closing unterminated <{}>", element.tag);
            self.push(MarkupNode::Element(element));
        }
        self.roots
    }
}
