use crate::markup::{Attributes, Element};

/// Typed attribute storage addressed by attribute name
pub trait NodeAttrs: Default {
    fn get(&self, name: &str) -> Option<&str>;
    fn set(&mut self, name: &str, value: Option<String>);
}

pub type ParseFn = fn(&Element) -> Option<String>;
pub type RenderFn<T> = fn(&T) -> Attributes;

/// One row of a node's attribute table.
///
/// Without a `parse` rule the value is read from the markup attribute of the
/// same name. Without a `render` rule the value is written back under the same
/// name when present.
pub struct AttributeSpec<T: 'static> {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub parse: Option<ParseFn>,
    pub render: Option<RenderFn<T>>,
}

impl<T: NodeAttrs + 'static> AttributeSpec<T> {
    /// Literal pass-through attribute with a null default
    pub const fn literal(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            parse: None,
            render: None,
        }
    }

    pub fn parse_value(&self, element: &Element) -> Option<String> {
        let value = match self.parse {
            Some(parse) => parse(element),
            None => element.attr(self.name).map(str::to_owned),
        };
        value.or_else(|| self.default.map(str::to_owned))
    }

    pub fn render_value(&self, attrs: &T) -> Attributes {
        match self.render {
            Some(render) => render(attrs),
            None => attrs
                .get(self.name)
                .map(|value| Attributes::single(self.name, value))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Caption {
        text: Option<String>,
    }

    impl NodeAttrs for Caption {
        fn get(&self, name: &str) -> Option<&str> {
            match name {
                "text" => self.text.as_deref(),
                _ => None,
            }
        }

        fn set(&mut self, name: &str, value: Option<String>) {
            if name == "text" {
                self.text = value;
            }
        }
    }

    fn parse_from_data_text(element: &Element) -> Option<String> {
        element.attr("data-text").map(str::to_owned)
    }

    fn render_upper(attrs: &Caption) -> Attributes {
        attrs
            .text
            .as_deref()
            .map(|text| Attributes::single("data-text", text.to_uppercase()))
            .unwrap_or_default()
    }

    #[test]
    fn literal_attribute_reads_same_name() {
        let spec = AttributeSpec::<Caption>::literal("text");
        let element = Element::with_attributes("span", Attributes::single("text", "hi"));

        assert_eq!(spec.parse_value(&element).as_deref(), Some("hi"));
    }

    #[test]
    fn missing_value_falls_back_to_default() {
        let spec = AttributeSpec::<Caption> {
            default: Some("none"),
            ..AttributeSpec::literal("text")
        };

        assert_eq!(spec.parse_value(&Element::new("span")).as_deref(), Some("none"));
    }

    #[test]
    fn absent_literal_renders_nothing() {
        let spec = AttributeSpec::<Caption>::literal("text");
        assert!(spec.render_value(&Caption::default()).is_empty());
    }

    #[test]
    fn custom_rules_are_used() {
        let spec = AttributeSpec::<Caption> {
            name: "text",
            default: None,
            parse: Some(parse_from_data_text),
            render: Some(render_upper),
        };
        let element = Element::with_attributes("span", Attributes::single("data-text", "abc"));

        let text = spec.parse_value(&element);
        assert_eq!(text.as_deref(), Some("abc"));

        let rendered = spec.render_value(&Caption { text });
        assert_eq!(rendered.get("data-text"), Some("ABC"));
    }
}
