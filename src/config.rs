//! Configuration for building and querying a catalog index.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CatalogError, Result};

/// How products with equal hit counts are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Ascending case-folded model, then the full record. Deterministic.
    #[default]
    Model,
    /// Keep whatever order the working score map iterates in. Equal-hit
    /// products may come back in a different order on each call.
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Secondary sort key for equal hit counts.
    pub tie_break: TieBreak,
    /// Catalogs at least this large are tokenized in parallel
    /// (only with the `parallel` feature).
    pub parallel_threshold: usize,
    /// Cap on results returned after ranking. `None` returns everything.
    pub max_results: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Model,
            parallel_threshold: 1024,
            max_results: None,
        }
    }
}

impl CatalogConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == Some(0) {
            return Err(CatalogError::Config(
                "max_results must be at least 1 when set".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(CatalogError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Read and validate a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: CatalogConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
