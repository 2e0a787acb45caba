use super::{AttributeSpec, NodeAttrs, ParseRule};
use crate::markup::{Attributes, Element, merge_attributes};

/// Content group a node type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeGroup {
    Block,
    Inline,
}

/// Static description of a node type
pub struct NodeSpec<T: 'static> {
    pub name: &'static str,
    pub group: NodeGroup,
    pub inline: bool,
    pub draggable: bool,
    /// Leaf nodes have no editable content
    pub leaf: bool,
    pub attributes: &'static [AttributeSpec<T>],
    /// Tried in order, first match wins
    pub parse_rules: &'static [ParseRule],
}

impl<T: NodeAttrs + 'static> NodeSpec<T> {
    pub fn matching_rule(&self, element: &Element) -> Option<&ParseRule> {
        self.parse_rules.iter().find(|rule| rule.matches(element))
    }

    /// Parse an element into attributes if any rule accepts it
    pub fn parse(&self, element: &Element) -> Option<T> {
        let rule = self.matching_rule(element)?;
        log::trace!("<{}> matched {} as {}", element.tag, rule, self.name);
        Some(self.parse_attributes(element))
    }

    pub fn parse_attributes(&self, element: &Element) -> T {
        let mut attrs = T::default();
        for spec in self.attributes {
            attrs.set(spec.name, spec.parse_value(element));
        }
        attrs
    }

    /// Markup attributes for every declared attribute, in table order
    pub fn rendered_attributes(&self, attrs: &T) -> Attributes {
        let layers: Vec<Attributes> = self
            .attributes
            .iter()
            .map(|spec| spec.render_value(attrs))
            .collect();
        merge_attributes(&layers)
    }

    /// Attribute values for a freshly created node
    pub fn defaults(&self) -> T {
        let mut attrs = T::default();
        for spec in self.attributes {
            attrs.set(spec.name, spec.default.map(str::to_owned));
        }
        attrs
    }
}
