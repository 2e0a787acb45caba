use std::ops::Range;

use crate::editing::{EditorHost, Node, NodeKind, Patch, Step, TransactionError};
use crate::image::{ImageAttributes, ImageNode};
use crate::markup::{Element, MarkupNode, parse_fragment};

/// Tags that start a new block when re-hydrating markup
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "div",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "p",
    "pre",
    "section",
];

/// In-memory block document implementing [`EditorHost`]
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    /// Block index range; empty means a cursor between blocks
    pub(crate) selection: Range<usize>,
    /// Incremented on every transaction that changes the blocks
    pub(crate) version: u64,
    pub(crate) focused: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document over `nodes` with the cursor at the end
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let len = nodes.len();
        Self {
            nodes,
            selection: len..len,
            version: 0,
            focused: false,
        }
    }

    /// Re-hydrate a document from markup.
    ///
    /// Image markup becomes image blocks wherever it appears (an image inside
    /// a paragraph is lifted out as its own block). Block elements become
    /// paragraphs of their text; inline elements contribute text only.
    pub fn from_html(html: &str, image: &ImageNode) -> Self {
        let mut collector = BlockCollector {
            image,
            nodes: Vec::new(),
            text: String::new(),
        };
        collector.visit(&parse_fragment(html));
        collector.flush_paragraph();
        Self::from_nodes(collector.nodes)
    }

    pub fn to_html(&self, image: &ImageNode) -> String {
        self.nodes
            .iter()
            .map(|node| match &node.kind {
                NodeKind::Paragraph { text } => {
                    let mut p = Element::new("p");
                    p.children.push(MarkupNode::Text(text.clone()));
                    p.to_html()
                }
                NodeKind::Image(attrs) => image.render_to_string(attrs),
            })
            .collect()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Select a single block, as a click on an image would
    pub fn select_node(&mut self, index: usize) -> Result<(), TransactionError> {
        self.dispatch(vec![Step::SetSelection(index..index.saturating_add(1))])
            .map(|_| ())
    }

    fn selected_nodes(&self) -> &[Node] {
        self.nodes.get(self.selection.clone()).unwrap_or_default()
    }
}

impl EditorHost for Document {
    fn is_active(&self, node_name: &str) -> bool {
        let selected = self.selected_nodes();
        !selected.is_empty() && selected.iter().all(|node| node.name() == node_name)
    }

    fn get_attributes(&self, node_name: &str) -> Option<ImageAttributes> {
        self.selected_nodes()
            .iter()
            .rev()
            .filter(|node| node.name() == node_name)
            .find_map(Node::image_attributes)
            .cloned()
    }

    fn dispatch(&mut self, steps: Vec<Step>) -> Result<Patch, TransactionError> {
        let mut staged = Staged {
            nodes: self.nodes.clone(),
            selection: self.selection.clone(),
            focused: self.focused,
            changed: Vec::new(),
        };

        let step_count = steps.len();
        for step in steps {
            staged.apply(step).inspect_err(|err| {
                log::debug!("Transaction of {step_count} steps rejected: {err}");
            })?;
        }

        let Staged {
            nodes,
            selection,
            focused,
            changed,
        } = staged;
        if !changed.is_empty() {
            self.version += 1;
        }
        self.nodes = nodes;
        self.selection = selection;
        self.focused = focused;

        log::debug!(
            "Applied {step_count} steps, version {}, selection {:?}",
            self.version,
            self.selection
        );

        Ok(Patch {
            changed,
            new_selection: self.selection.clone(),
            version: self.version,
        })
    }
}

struct Staged {
    nodes: Vec<Node>,
    selection: Range<usize>,
    focused: bool,
    changed: Vec<Range<usize>>,
}

impl Staged {
    fn check(&self, range: &Range<usize>) -> bool {
        range.start <= range.end && range.end <= self.nodes.len()
    }

    fn apply(&mut self, step: Step) -> Result<(), TransactionError> {
        match step {
            Step::Focus => self.focused = true,
            Step::SetSelection(range) => {
                if !self.check(&range) {
                    return Err(TransactionError::InvalidSelection {
                        range,
                        len: self.nodes.len(),
                    });
                }
                self.selection = range;
            }
            Step::InsertContent(node) => {
                let range = self.selection.clone();
                if !self.check(&range) {
                    return Err(TransactionError::InvalidPosition {
                        range,
                        len: self.nodes.len(),
                    });
                }
                let at = range.start;
                self.nodes.drain(range);
                self.nodes.insert(at, node);
                self.changed.push(at..at + 1);
                self.selection = at + 1..at + 1;
            }
        }
        Ok(())
    }
}

struct BlockCollector<'a> {
    image: &'a ImageNode,
    nodes: Vec<Node>,
    text: String,
}

impl BlockCollector<'_> {
    fn visit(&mut self, markup: &[MarkupNode]) {
        for node in markup {
            match node {
                MarkupNode::Text(text) => self.text.push_str(text),
                MarkupNode::Element(element) => self.visit_element(element),
            }
        }
    }

    fn visit_element(&mut self, element: &Element) {
        if let Some(attrs) = self.image.parse_html(element) {
            self.flush_paragraph();
            self.nodes.push(Node::image(attrs));
        } else if BLOCK_TAGS.contains(&element.tag.as_str()) {
            self.flush_paragraph();
            self.visit(&element.children);
            self.flush_paragraph();
        } else if element.tag == "br" {
            self.text.push('\n');
        } else {
            if element.is_void() {
                log::debug!("Dropping unmatched <{}>", element.tag);
            }
            self.visit(&element.children);
        }
    }

    fn flush_paragraph(&mut self) {
        let text = self.text.trim();
        if !text.is_empty() {
            self.nodes.push(Node::paragraph(text));
        }
        self.text.clear();
    }
}
