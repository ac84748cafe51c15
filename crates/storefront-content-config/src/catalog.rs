//! Product catalog files.
//!
//! ```toml
//! [[products]]
//! slug = "gaming-mouse-pro-x"
//! name = "Gaming Mouse Pro X"
//! category = "mice"
//!
//! [[categories]]
//! slug = "mice"
//! name = "Gaming Mice"
//! ```

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use storefront_content_engine::LinkableItem;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
    #[serde(default)]
    pub categories: Vec<CatalogCategory>,
}

impl ProductCatalog {
    /// Unlike the config file, a missing catalog is an error.
    pub fn load_from_path<P: AsRef<Path>>(catalog_path: P) -> Result<Self, ConfigError> {
        let catalog_path = catalog_path.as_ref();
        let content = std::fs::read_to_string(catalog_path).map_err(|source| {
            ConfigError::CatalogReadError {
                catalog_path: catalog_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::CatalogParseError {
            catalog_path: catalog_path.to_path_buf(),
            source,
        })
    }

    /// Products first, then categories, in file order.
    pub fn linkable_items(&self) -> Vec<LinkableItem> {
        let products = self
            .products
            .iter()
            .map(|p| LinkableItem::product(p.slug.as_str(), p.name.as_str()));
        let categories = self
            .categories
            .iter()
            .map(|c| LinkableItem::category(c.slug.as_str(), c.name.as_str()));
        products.chain(categories).collect()
    }

    pub fn products_by_slug(&self) -> HashMap<String, CatalogProduct> {
        self.products.iter().map(|p| (p.slug.clone(), p.clone())).collect()
    }

    /// Category slug to its products, in file order.
    pub fn products_by_category(&self) -> HashMap<String, Vec<CatalogProduct>> {
        let mut out: HashMap<String, Vec<CatalogProduct>> = HashMap::new();
        for product in &self.products {
            if let Some(category) = &product.category {
                out.entry(category.clone()).or_default().push(product.clone());
            }
        }
        out
    }
}
