//! Where products come from.
//!
//! An index never reaches for ambient catalog state: whoever builds it hands
//! over a [`ProductSource`], which is read exactly once.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::Product;

/// Supplies the full product list at index construction time.
pub trait ProductSource {
    /// Every product in the catalog. Failing here fails construction.
    fn all_products(&self) -> Result<Vec<Product>>;
}

impl ProductSource for [Product] {
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.to_vec())
    }
}

impl ProductSource for Vec<Product> {
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.clone())
    }
}

/// Accepted catalog file shapes: a bare array or `{ "products": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

/// Parse catalog JSON into products.
///
/// Every record needs `model`, `type` and `name`; an empty model is rejected
/// since it could never be looked up meaningfully.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let products = match serde_json::from_str::<CatalogFile>(json)? {
        CatalogFile::Bare(products) | CatalogFile::Wrapped { products } => products,
    };

    if let Some(position) = products.iter().position(|p| p.model.trim().is_empty()) {
        return Err(CatalogError::Source(format!(
            "record {} has an empty model",
            position
        )));
    }

    Ok(products)
}

/// A product source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonCatalog {
    fn all_products(&self) -> Result<Vec<Product>> {
        let path = self.path();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Source(format!("cannot read {}: {}", path.display(), e))
        })?;
        let products = parse_products(&text)?;
        debug!(path = %path.display(), products = products.len(), "catalog file loaded");
        Ok(products)
    }
}
