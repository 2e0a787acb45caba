use serde::{Deserialize, Serialize};

use crate::markup::{Attributes, Element};
use crate::schema::{AttributeSpec, NodeAttrs, NodeGroup, NodeSpec, ParseRule};

/// Markup attribute holding the asset identifier
pub const ID_MARKER: &str = "data-directus-id";
/// Markup attribute holding the asset's display filename
pub const FILENAME_MARKER: &str = "data-directus-filename";

/// Attributes of an image node.
///
/// `id` references an asset in the library and wins over `src` at render
/// time; `src` is only meaningful for external images. Both may be set at
/// once, nothing here enforces exclusivity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ImageAttributes {
    /// Image backed by a library asset
    pub fn asset(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Image pointing at an arbitrary URL
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }
}

impl NodeAttrs for ImageAttributes {
    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            "src" => self.src.as_deref(),
            "alt" => self.alt.as_deref(),
            "filename" => self.filename.as_deref(),
            "width" => self.width.as_deref(),
            "height" => self.height.as_deref(),
            "title" => self.title.as_deref(),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        let slot = match name {
            "id" => &mut self.id,
            "src" => &mut self.src,
            "alt" => &mut self.alt,
            "filename" => &mut self.filename,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "title" => &mut self.title,
            _ => {
                log::debug!("Ignoring unknown image attribute {name}");
                return;
            }
        };
        *slot = value;
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn parse_id(element: &Element) -> Option<String> {
    element.attr(ID_MARKER).map(str::to_owned)
}

fn render_id(attrs: &ImageAttributes) -> Attributes {
    present(attrs.id.as_deref())
        .map(|id| Attributes::single(ID_MARKER, id))
        .unwrap_or_default()
}

// With an identity marker the source is derived at render time, never read
fn parse_src(element: &Element) -> Option<String> {
    if present(element.attr(ID_MARKER)).is_some() {
        return None;
    }
    element.attr("src").map(str::to_owned)
}

fn render_src(attrs: &ImageAttributes) -> Attributes {
    present(attrs.src.as_deref())
        .map(|src| Attributes::single("src", src))
        .unwrap_or_default()
}

fn parse_filename(element: &Element) -> Option<String> {
    element.attr(FILENAME_MARKER).map(str::to_owned)
}

fn render_filename(attrs: &ImageAttributes) -> Attributes {
    present(attrs.filename.as_deref())
        .map(|filename| Attributes::single(FILENAME_MARKER, filename))
        .unwrap_or_default()
}

pub(crate) static IMAGE_ATTRIBUTES: [AttributeSpec<ImageAttributes>; 7] = [
    AttributeSpec {
        name: "id",
        default: None,
        parse: Some(parse_id),
        render: Some(render_id),
    },
    AttributeSpec {
        name: "src",
        default: None,
        parse: Some(parse_src),
        render: Some(render_src),
    },
    AttributeSpec::literal("alt"),
    AttributeSpec {
        name: "filename",
        default: None,
        parse: Some(parse_filename),
        render: Some(render_filename),
    },
    AttributeSpec::literal("width"),
    AttributeSpec::literal("height"),
    AttributeSpec::literal("title"),
];

static IMAGE_PARSE_RULES: [ParseRule; 2] = [
    ParseRule::tag_with_attribute("img", ID_MARKER),
    ParseRule::tag_with_attribute("img", "src"),
];

pub(crate) static IMAGE_SPEC: NodeSpec<ImageAttributes> = NodeSpec {
    name: "image",
    group: NodeGroup::Block,
    inline: false,
    draggable: true,
    leaf: true,
    attributes: &IMAGE_ATTRIBUTES,
    parse_rules: &IMAGE_PARSE_RULES,
};
