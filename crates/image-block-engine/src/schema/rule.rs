use std::fmt;

use crate::markup::Element;

/// Matcher for markup that should become a given node type.
///
/// Displayed in selector form, e.g. `img[src]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    pub tag: &'static str,
    pub attribute: Option<&'static str>,
}

impl ParseRule {
    pub const fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            attribute: None,
        }
    }

    pub const fn tag_with_attribute(tag: &'static str, attribute: &'static str) -> Self {
        Self {
            tag,
            attribute: Some(attribute),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.tag.eq_ignore_ascii_case(self.tag)
            && self
                .attribute
                .is_none_or(|attribute| element.has_attr(attribute))
    }
}

impl fmt::Display for ParseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attribute {
            Some(attribute) => write!(f, "{}[{attribute}]", self.tag),
            None => f.write_str(self.tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Attributes;

    #[test]
    fn attribute_presence_is_enough() {
        let rule = ParseRule::tag_with_attribute("img", "src");
        let element = Element::with_attributes("img", Attributes::single("src", ""));

        assert!(rule.matches(&element));
    }

    #[test]
    fn wrong_tag_does_not_match() {
        let rule = ParseRule::tag_with_attribute("img", "src");
        let element = Element::with_attributes("video", Attributes::single("src", "a"));

        assert!(!rule.matches(&element));
    }

    #[test]
    fn display_uses_selector_form() {
        assert_eq!(ParseRule::tag_with_attribute("img", "src").to_string(), "img[src]");
        assert_eq!(ParseRule::tag("p").to_string(), "p");
    }
}
