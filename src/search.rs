// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: type filtering, description scoring, ranking.
//!
//! A search takes two tag lists and works on a per-call score map
//! (product → hits):
//!
//! 1. **Type pass**: every product in a matching type bucket enters the map
//!    with 0 hits. Unknown tags are skipped.
//! 2. The type filter is on only if the map is non-empty now. Passing type
//!    tags that match nothing is the same as passing none.
//! 3. **Description pass**: empty tags are skipped. Any other tag turns the
//!    description filter on, matched or not. Each product in the tag's bucket
//!    gets +1 if already in the map; otherwise it enters with 1 hit, but only
//!    when the type filter is off.
//! 4. With the description filter on, zero-hit products are dropped.
//! 5. Rank by descending hits (see `scoring`).
//!
//! Searching never mutates the index, so concurrent searches need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;
use crate::scoring::rank;
use crate::types::{Product, ScoredProduct};

impl CatalogIndex {
    /// Products matching the tags, best first.
    ///
    /// Tags are matched case-insensitively against whole types and whole
    /// description tokens. Splitting a free-text query into tags is the
    /// caller's job.
    pub fn search<D, T>(&self, description_tags: &[D], type_tags: &[T]) -> Vec<&Product>
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        self.search_scored(description_tags, type_tags)
            .into_iter()
            .map(|scored| scored.product)
            .collect()
    }

    /// Like [`search`](Self::search) for callers whose tag lists may be absent.
    ///
    /// A missing list is an `InvalidArgument`; an empty one is fine.
    pub fn try_search<D, T>(
        &self,
        description_tags: Option<&[D]>,
        type_tags: Option<&[T]>,
    ) -> Result<Vec<&Product>>
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let description_tags =
            description_tags.ok_or_else(|| CatalogError::missing("descriptionTags"))?;
        let type_tags = type_tags.ok_or_else(|| CatalogError::missing("typeTags"))?;
        Ok(self.search(description_tags, type_tags))
    }

    /// Search and keep each product's hit count.
    pub fn search_scored<D, T>(&self, description_tags: &[D], type_tags: &[T]) -> Vec<ScoredProduct<'_>>
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let mut working: HashMap<&Product, u32> = HashMap::new();

        for tag in type_tags {
            let tag = tag.as_ref();
            let Some(bucket) = self.type_map.get(tag) else {
                trace!(tag, "type tag matches no bucket");
                continue;
            };
            for product in bucket.iter().map(Arc::as_ref) {
                working.entry(product).or_insert(0);
            }
        }

        let filtered_by_type = !working.is_empty();
        let mut filtered_by_description = false;

        for tag in description_tags {
            let tag = tag.as_ref();
            if tag.is_empty() {
                continue;
            }
            filtered_by_description = true;

            let Some(bucket) = self.description_map.get(tag) else {
                trace!(tag, "description tag matches no bucket");
                continue;
            };
            for product in bucket.iter().map(Arc::as_ref) {
                match working.get_mut(product) {
                    Some(hits) => *hits += 1,
                    None if !filtered_by_type => {
                        working.insert(product, 1);
                    }
                    None => {}
                }
            }
        }

        let mut scored: Vec<ScoredProduct<'_>> = working
            .into_iter()
            .filter(|&(_, hits)| !filtered_by_description || hits >= 1)
            .map(|(product, hits)| ScoredProduct::new(product, hits))
            .collect();

        let config = self.config();
        rank(&mut scored, config.tie_break);
        if let Some(max) = config.max_results {
            scored.truncate(max);
        }

        debug!(
            filtered_by_type,
            filtered_by_description,
            results = scored.len(),
            "catalog search"
        );

        scored
    }
}
