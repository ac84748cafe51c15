use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_content_engine::{AutoLinkOptions, ParseOptions, PipelineOptions};
use thiserror::Error;

pub mod catalog;

pub use catalog::{CatalogCategory, CatalogProduct, ProductCatalog};

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

    #[error("Failed to read catalog at {catalog_path}: {source}")]
    CatalogReadError {
        catalog_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog at {catalog_path}: {source}")]
    CatalogParseError {
        catalog_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("max_links_per_term must be at least 1 (got {value}) in {config_path}")]
    InvalidMaxLinks { config_path: PathBuf, value: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoLinkConfig {
    pub enabled: bool,
    pub max_links_per_term: usize,
}

impl Default for AutoLinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_links_per_term: AutoLinkOptions::DEFAULT_MAX_LINKS_PER_TERM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingsConfig {
    pub inject_ids: bool,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self { inject_ids: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub keep_whitespace_gaps: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of every generated link, e.g. `tech` in `/tech/products/x`.
    pub site_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub auto_link: AutoLinkConfig,
    pub headings: HeadingsConfig,
    pub parsing: ParsingConfig,
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.auto_link.max_links_per_term == 0 {
            return Err(ConfigError::InvalidMaxLinks {
                config_path: config_path.to_path_buf(),
                value: 0,
            });
        }

        // Expand shell variables and tilde in the catalog path
        config.catalog_path = config
            .catalog_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

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
        let config_dir = shellexpand::tilde("~/.config/storefront-content");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Loads the configured catalog, if one is set.
    pub fn load_catalog(&self) -> Result<Option<ProductCatalog>, ConfigError> {
        self.catalog_path
            .as_deref()
            .map(ProductCatalog::load_from_path)
            .transpose()
    }

    /// `None` when auto-linking is disabled.
    pub fn auto_link_options(&self) -> Option<AutoLinkOptions> {
        self.auto_link.enabled.then(|| {
            AutoLinkOptions::new(self.site_slug.as_str()).with_max_links_per_term(self.auto_link.max_links_per_term)
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            keep_whitespace_gaps: self.parsing.keep_whitespace_gaps,
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            auto_link: self.auto_link_options(),
            relink: true,
            inject_heading_ids: self.headings.inject_ids,
            parse: self.parse_options(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
