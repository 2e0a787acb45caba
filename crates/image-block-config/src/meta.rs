use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registration metadata the hosting application uses to list the extension
/// and render its option form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionMeta {
    pub name: String,
    pub title: String,
    pub package: String,
    pub group: String,
    /// Default attribute values the host pre-fills; none for images
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
    pub options: Vec<OptionField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionField {
    pub field: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub meta: FieldMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub interface: String,
    pub width: String,
    pub note: String,
}

impl ExtensionMeta {
    pub fn image() -> Self {
        Self {
            name: "image".into(),
            title: "Image".into(),
            package: "File Library".into(),
            group: "node".into(),
            defaults: BTreeMap::new(),
            options: vec![OptionField {
                field: "cdnURL".into(),
                name: "CDN URL".into(),
                field_type: "string".into(),
                meta: FieldMeta {
                    interface: "string".into(),
                    width: "half".into(),
                    note: "CDN address for HTML output (optional)".into(),
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_block_engine::ImageNode;

    #[test]
    fn image_meta_matches_node_name() {
        assert_eq!(ExtensionMeta::image().name, ImageNode::NAME);
    }

    #[test]
    fn single_half_width_cdn_option() {
        let meta = ExtensionMeta::image();

        assert_eq!(meta.options.len(), 1);
        let option = &meta.options[0];
        assert_eq!(option.field, "cdnURL");
        assert_eq!(option.field_type, "string");
        assert_eq!(option.meta.width, "half");
    }

    #[test]
    fn defaults_are_empty_and_survive_serialization() {
        let meta = ExtensionMeta::image();
        assert!(meta.defaults.is_empty());

        let toml = toml::to_string(&meta).unwrap();
        let parsed: ExtensionMeta = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, meta);
    }

    #[test]
    fn serializes_type_key() {
        let toml = toml::to_string(&ExtensionMeta::image()).unwrap();
        assert!(toml.contains(r#"type = "string""#));
    }
}
