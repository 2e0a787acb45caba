use indexmap::IndexMap;

/// Elements that never have content or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Attribute map that keeps insertion order.
///
/// Setting an existing key replaces its value in place, so the original
/// position is kept. This matters for stable output when a later layer
/// overrides an attribute during [`merge_attributes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-attribute map, the common shape returned by render rules
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut attributes = Self::new();
        attributes.set(name, value);
        attributes
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// Merge attribute layers, later layers taking precedence.
///
/// `class` values are unioned (existing classes first, new ones appended once)
/// and `style` declarations are merged per property. An existing empty value
/// counts as unset and is simply replaced.
pub fn merge_attributes<'a>(layers: impl IntoIterator<Item = &'a Attributes>) -> Attributes {
    let mut merged = Attributes::new();

    for layer in layers {
        for (name, value) in layer.iter() {
            let existing = merged
                .get(name)
                .filter(|existing| !existing.is_empty())
                .map(str::to_owned);

            let value = match (name, existing) {
                ("class", Some(existing)) => merge_classes(&existing, value),
                ("style", Some(existing)) => merge_styles(&existing, value),
                _ => value.to_owned(),
            };
            merged.set(name, value);
        }
    }

    merged
}

fn merge_classes(existing: &str, value: &str) -> String {
    let mut classes: Vec<&str> = existing.split_whitespace().collect();
    for class in value.split_whitespace() {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes.join(" ")
}

fn style_declarations(style: &str) -> impl Iterator<Item = (String, String)> + '_ {
    style.split(';').filter_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        let property = property.trim();
        (!property.is_empty()).then(|| (property.to_owned(), value.trim().to_owned()))
    })
}

fn merge_styles(existing: &str, value: &str) -> String {
    let mut declarations: IndexMap<String, String> = style_declarations(existing).collect();
    declarations.extend(style_declarations(value));
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single element with its attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<MarkupNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_attributes(tag, Attributes::new())
    }

    pub fn with_attributes(tag: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    pub fn is_void(&self) -> bool {
        is_void(&self.tag)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        super::writer::write_element(self, &mut out);
        out
    }
}

fn collect_text(nodes: &[MarkupNode], out: &mut String) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push_str(text),
            MarkupNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
}

impl MarkupNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn set_existing_key_keeps_position() {
        let mut attributes = attrs(&[("a", "1"), ("b", "2")]);
        attributes.set("a", "3");

        let order: Vec<_> = attributes.iter().collect();
        assert_eq!(order, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn later_layer_wins() {
        let merged = merge_attributes([&attrs(&[("src", "old")]), &attrs(&[("src", "new")])]);
        assert_eq!(merged.get("src"), Some("new"));
    }

    #[test]
    fn classes_are_unioned() {
        let merged = merge_attributes([
            &attrs(&[("class", "rounded shadow")]),
            &attrs(&[("class", "shadow wide")]),
        ]);
        assert_eq!(merged.get("class"), Some("rounded shadow wide"));
    }

    #[test]
    fn styles_merge_by_property() {
        let merged = merge_attributes([
            &attrs(&[("style", "width: 10px; color: red")]),
            &attrs(&[("style", "color: blue;")]),
        ]);
        assert_eq!(merged.get("style"), Some("width: 10px; color: blue"));
    }

    #[test]
    fn empty_existing_value_is_replaced() {
        let merged = merge_attributes([&attrs(&[("class", "")]), &attrs(&[("class", "x")])]);
        assert_eq!(merged.get("class"), Some("x"));
    }

    #[test]
    fn text_content_descends_into_children() {
        let mut em = Element::new("em");
        em.children.push(MarkupNode::Text("world".into()));
        let mut p = Element::new("p");
        p.children.push(MarkupNode::Text("hello ".into()));
        p.children.push(MarkupNode::Element(em));

        assert_eq!(p.text_content(), "hello world");
    }
}
