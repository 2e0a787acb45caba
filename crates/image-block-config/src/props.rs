use image_block_engine::{ImageNode, ImageOptions};
use serde::{Deserialize, Serialize};

use crate::RootPath;

/// Host-facing options of the image extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProps {
    /// CDN address for HTML output
    #[serde(rename = "cdnURL", default, skip_serializing_if = "Option::is_none")]
    pub cdn_url: Option<String>,
}

impl ImageProps {
    /// Base address for asset sources: the CDN when set, else `<root>assets/`
    pub fn public_url(&self, root: &RootPath) -> String {
        match self.cdn_url.as_deref().filter(|cdn| !cdn.is_empty()) {
            Some(cdn) => normalize_cdn_url(cdn),
            None => root.assets_url(),
        }
    }

    /// Configure the image node from these props
    pub fn load(&self, root: &RootPath) -> ImageNode {
        let public_url = self.public_url(root);
        log::debug!("Image public URL: {public_url}");
        ImageNode::configure(ImageOptions::new(public_url))
    }
}

/// Make sure `cdn` ends with a path separator before ids are appended
pub fn normalize_cdn_url(cdn: &str) -> String {
    if cdn.ends_with('/') {
        cdn.to_owned()
    } else {
        format!("{cdn}/")
    }
}
