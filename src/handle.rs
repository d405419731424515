//! Swapping a live catalog without blocking readers for long.
//!
//! Queries take a snapshot (`Arc<CatalogIndex>`) and search it without any
//! lock held. A refresh builds the replacement off to the side and swaps the
//! pointer under a brief write lock; snapshots taken before the swap keep
//! answering from the old catalog until dropped.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::index::CatalogIndex;
use crate::source::ProductSource;

#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<CatalogIndex>>,
}

impl CatalogHandle {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Build the first index from `source`.
    pub fn from_source<S>(source: &S, config: CatalogConfig) -> Result<Self>
    where
        S: ProductSource + ?Sized,
    {
        Ok(Self::new(CatalogIndex::from_source(source, config)?))
    }

    /// The index queries should run against right now.
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        Arc::clone(&self.current.read())
    }

    /// Install `index`, returning the one it replaces.
    pub fn replace(&self, index: CatalogIndex) -> Arc<CatalogIndex> {
        let installed = index.len();
        let next = Arc::new(index);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            previous = previous.len(),
            current = installed,
            "catalog index replaced"
        );
        previous
    }

    /// Rebuild from `source` and swap it in.
    ///
    /// If the source fails, the current index stays in place and the error
    /// is returned.
    pub fn refresh<S>(&self, source: &S, config: CatalogConfig) -> Result<Arc<CatalogIndex>>
    where
        S: ProductSource + ?Sized,
    {
        match CatalogIndex::from_source(source, config) {
            Ok(index) => Ok(self.replace(index)),
            Err(e) => {
                warn!(error = %e, "catalog refresh failed; keeping current index");
                Err(e)
            }
        }
    }
}
