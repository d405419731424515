//! Error types for catalog construction and boundary calls.

/// Main error type for catalog operations.
///
/// Lookup misses are not errors: `get_product` returns `None` and unknown
/// tags simply contribute no matches.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The product source could not supply a catalog
    #[error("Product source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn missing(what: &str) -> Self {
        CatalogError::InvalidArgument(format!("{} must be present", what))
    }
}

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
