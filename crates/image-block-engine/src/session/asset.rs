use serde::{Deserialize, Serialize};

use crate::image::ImageAttributes;

/// Asset descriptor handed over by the library picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryAsset {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub filename_download: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl From<&LibraryAsset> for ImageAttributes {
    fn from(asset: &LibraryAsset) -> Self {
        Self {
            id: Some(asset.id.clone()),
            alt: asset.title.clone(),
            filename: asset.filename_download.clone(),
            width: asset.width.map(|width| width.to_string()),
            height: asset.height.map(|height| height.to_string()),
            ..Self::default()
        }
    }
}
