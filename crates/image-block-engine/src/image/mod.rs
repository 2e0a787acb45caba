//! The "image" block node.
//!
//! An image is either a library asset, referenced by an identity marker and
//! resolved against [`ImageOptions::public_url`] at render time, or an
//! external image with a literal `src`. Both live in the same node type so a
//! change to the asset addressing scheme only needs a new `public_url`, never
//! a rewrite of stored documents.

mod attributes;

pub use attributes::{FILENAME_MARKER, ID_MARKER, ImageAttributes};

use crate::editing::{EditorHost, Node, Transaction};
use crate::markup::{Attributes, Element, MarkupNode, merge_attributes, parse_fragment};
use crate::schema::NodeSpec;
use attributes::IMAGE_SPEC;

/// Default base address when nothing else is configured
pub const DEFAULT_PUBLIC_URL: &str = "/assets/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    /// Base address prepended to asset identifiers
    pub public_url: String,
    /// Extra static attributes merged under every rendered image
    pub html_attributes: Attributes,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_URL)
    }
}

impl ImageOptions {
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into(),
            html_attributes: Attributes::new(),
        }
    }

    pub fn with_html_attributes(mut self, html_attributes: Attributes) -> Self {
        self.html_attributes = html_attributes;
        self
    }
}

/// Configured image node type: schema plus render options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageNode {
    options: ImageOptions,
}

impl ImageNode {
    pub const NAME: &'static str = "image";
    pub const TAG: &'static str = "img";

    pub fn configure(options: ImageOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImageOptions {
        &self.options
    }

    pub fn spec() -> &'static NodeSpec<ImageAttributes> {
        &IMAGE_SPEC
    }

    /// Attributes for `element` if it is image markup
    pub fn parse_html(&self, element: &Element) -> Option<ImageAttributes> {
        Self::spec().parse(element)
    }

    /// All image nodes found at the top level of a markup fragment
    pub fn parse_fragment(&self, markup: &str) -> Vec<ImageAttributes> {
        parse_fragment(markup)
            .iter()
            .filter_map(MarkupNode::as_element)
            .filter_map(|element| self.parse_html(element))
            .collect()
    }

    /// Render an image node to its markup element.
    ///
    /// With an identity marker the `src` is always computed from
    /// `public_url`, overriding any stored literal. Precedence, lowest first:
    /// configured static attributes, declared attributes, computed `src`.
    pub fn render_html(&self, attrs: &ImageAttributes) -> Element {
        let rendered = Self::spec().rendered_attributes(attrs);

        let computed_src = rendered
            .get(ID_MARKER)
            .filter(|id| !id.is_empty())
            .map(|id| self.asset_url(id, rendered.get(FILENAME_MARKER)));

        let mut layers = vec![self.options.html_attributes.clone(), rendered];
        if let Some(src) = computed_src {
            layers.push(Attributes::single("src", src));
        }

        Element::with_attributes(Self::TAG, merge_attributes(&layers))
    }

    pub fn render_to_string(&self, attrs: &ImageAttributes) -> String {
        self.render_html(attrs).to_html()
    }

    /// `public_url + id`, plus `/filename` when a filename is known
    pub fn asset_url(&self, id: &str, filename: Option<&str>) -> String {
        let mut url = format!("{}{id}", self.options.public_url);
        if let Some(filename) = filename.filter(|filename| !filename.is_empty()) {
            url.push('/');
            url.push_str(filename);
        }
        url
    }
}

/// Insertion command for image nodes
pub trait SetImage {
    /// Insert an image at the current selection, replacing it
    fn set_image(self, attrs: ImageAttributes) -> Self;
}

impl<E: EditorHost + ?Sized> SetImage for Transaction<'_, E> {
    fn set_image(self, attrs: ImageAttributes) -> Self {
        self.insert_content(Node::image(attrs))
    }
}
