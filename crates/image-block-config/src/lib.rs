mod meta;
mod props;
mod root_path;

pub use meta::{ExtensionMeta, FieldMeta, OptionField};
pub use props::{ImageProps, normalize_cdn_url};
pub use root_path::RootPath;

use image_block_engine::ImageNode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Public address of the hosting application, used when no CDN is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_url: Option<String>,
    #[serde(default)]
    pub image: ImageProps,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/image-block");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolver for the default base address.
    ///
    /// A `root_url` that is not an absolute URL is used verbatim as a path.
    pub fn root_path(&self) -> RootPath {
        match self.root_url.as_deref() {
            Some(root_url) => RootPath::from_admin_url(root_url).unwrap_or_else(|err| {
                log::debug!("Using root_url {root_url:?} as a plain path: {err}");
                RootPath::new(root_url)
            }),
            None => RootPath::default(),
        }
    }

    /// Image node configured from this file
    pub fn image_node(&self) -> ImageNode {
        self.image.load(&self.root_path())
    }
}
