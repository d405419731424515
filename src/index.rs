// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog index construction and direct lookup.
//!
//! A [`CatalogIndex`] holds three case-insensitive maps built together from one
//! flat product collection:
//!
//! ```text
//!   products          model  ──▶ Product
//!   type_map          type   ──▶ {Product, ...}
//!   description_map   token  ──▶ {Product, ...}   (tokens of name + " " + type)
//! ```
//!
//! Each product is stored once behind an `Arc`; bucket entries are clones of
//! that `Arc`, so buckets reference products rather than owning copies.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ONE_TYPE_BUCKET**: every product in `products` is in exactly one
//!    `type_map` bucket, keyed by its own folded type.
//! 2. **TOKEN_BUCKETS**: every product is in the `description_map` bucket of
//!    each distinct non-empty whitespace token of its description.
//! 3. **FROZEN**: nothing mutates the maps after construction. A changed
//!    catalog means a new index (see `handle::CatalogHandle`).
//!
//! Indices built by [`CatalogIndex::from_parts`] are taken as given and may
//! break 1 and 2; `verify::verify_index` reports how.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::keymap::CaseInsensitiveMap;
use crate::source::ProductSource;
use crate::types::Product;

/// The set of products sharing one type or one description token.
pub type ProductBucket = HashSet<Arc<Product>>;

/// Read-only product catalog with type and description indices.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    pub(crate) products: CaseInsensitiveMap<Arc<Product>>,
    pub(crate) type_map: CaseInsensitiveMap<ProductBucket>,
    pub(crate) description_map: CaseInsensitiveMap<ProductBucket>,
    pub(crate) config: CatalogConfig,
}

/// Description tokens of a product: `name + " " + type` split on whitespace.
///
/// Empty tokens never appear. Duplicates are kept; bucket insertion dedups them.
pub fn tokenize_description(product: &Product) -> Vec<&str> {
    product
        .name
        .split_whitespace()
        .chain(product.product_type.split_whitespace())
        .collect()
}

impl CatalogIndex {
    /// Build an index with the default configuration.
    ///
    /// If two products share a model (case-insensitively) the later one wins
    /// and the earlier one is dropped from every index.
    pub fn build<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        Self::assemble(products, CatalogConfig::default())
    }

    /// Build an index with a caller-supplied configuration.
    pub fn build_with_config<I>(products: I, config: CatalogConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        config.validate()?;
        Ok(Self::assemble(products, config))
    }

    /// Pull every product from `source` once and build an index from it.
    ///
    /// A failing source fails construction; no partial index is produced.
    pub fn from_source<S>(source: &S, config: CatalogConfig) -> Result<Self>
    where
        S: ProductSource + ?Sized,
    {
        config.validate()?;
        let products = source.all_products()?;
        Ok(Self::assemble(products, config))
    }

    /// Create an index from pre-built maps, for deterministic fixtures.
    ///
    /// All three maps are required. Keys are re-folded on the way in; keys
    /// that fold together have their buckets merged, and for `products` the
    /// entry with the greatest original key wins. The maps are not
    /// cross-checked against each other.
    pub fn from_parts(
        products: Option<HashMap<String, Product>>,
        type_map: Option<HashMap<String, HashSet<Product>>>,
        description_map: Option<HashMap<String, HashSet<Product>>>,
    ) -> Result<Self> {
        let products = products.ok_or_else(|| CatalogError::missing("products"))?;
        let type_map = type_map.ok_or_else(|| CatalogError::missing("typeMap"))?;
        let description_map =
            description_map.ok_or_else(|| CatalogError::missing("descriptionMap"))?;

        let mut pool: HashSet<Arc<Product>> = HashSet::new();
        let mut intern = |product: Product| -> Arc<Product> {
            if let Some(existing) = pool.get(&product) {
                return Arc::clone(existing);
            }
            let shared = Arc::new(product);
            pool.insert(Arc::clone(&shared));
            shared
        };

        let mut entries: Vec<(String, Product)> = products.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut by_model = CaseInsensitiveMap::with_capacity(entries.len());
        for (key, product) in entries {
            by_model.insert(&key, intern(product));
        }

        let mut types: CaseInsensitiveMap<ProductBucket> = CaseInsensitiveMap::new();
        for (key, bucket) in type_map {
            types
                .get_or_default(&key)
                .extend(bucket.into_iter().map(&mut intern));
        }

        let mut descriptions: CaseInsensitiveMap<ProductBucket> = CaseInsensitiveMap::new();
        for (key, bucket) in description_map {
            descriptions
                .get_or_default(&key)
                .extend(bucket.into_iter().map(&mut intern));
        }

        debug!(
            products = by_model.len(),
            types = types.len(),
            tokens = descriptions.len(),
            "catalog index assembled from parts"
        );

        Ok(Self {
            products: by_model,
            type_map: types,
            description_map: descriptions,
            config: CatalogConfig::default(),
        })
    }

    /// Replace the query-time configuration.
    pub fn with_config(mut self, config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    fn assemble<I>(products: I, config: CatalogConfig) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let mut by_model: CaseInsensitiveMap<Arc<Product>> = CaseInsensitiveMap::new();
        for product in products {
            let model = product.model.clone();
            if let Some(previous) = by_model.insert(&model, Arc::new(product)) {
                warn!(model = %previous.model, replacement = %model, "duplicate model replaces earlier product");
            }
        }

        let members: Vec<&Arc<Product>> = by_model.values().collect();
        let tokens = tokenize_all(&members, &config);

        let mut type_map: CaseInsensitiveMap<ProductBucket> = CaseInsensitiveMap::new();
        let mut description_map: CaseInsensitiveMap<ProductBucket> = CaseInsensitiveMap::new();

        for (&product, product_tokens) in members.iter().zip(tokens) {
            type_map
                .get_or_default(&product.product_type)
                .insert(Arc::clone(product));

            for token in product_tokens {
                description_map
                    .get_or_default(token)
                    .insert(Arc::clone(product));
            }
        }

        info!(
            products = by_model.len(),
            types = type_map.len(),
            tokens = description_map.len(),
            "catalog index built"
        );

        Self {
            products: by_model,
            type_map,
            description_map,
            config,
        }
    }

    /// Look up a product by model, ignoring case.
    pub fn get_product(&self, model: &str) -> Option<&Product> {
        self.products.get(model).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Every product, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values().map(Arc::as_ref)
    }

    /// Folded type keys.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.type_map.keys()
    }

    /// Folded description tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.description_map.keys()
    }

    /// Products whose type matches `tag`. Empty when nothing does.
    pub fn products_of_type<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Product> {
        self.type_map
            .get(tag)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(Arc::as_ref))
    }

    /// Products whose description contains `tag` as a whole token.
    pub fn products_with_token<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Product> {
        self.description_map
            .get(tag)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(Arc::as_ref))
    }
}

/// Tokenize every product, in parallel for large catalogs.
#[cfg(feature = "parallel")]
fn tokenize_all<'a>(members: &[&'a Arc<Product>], config: &CatalogConfig) -> Vec<Vec<&'a str>> {
    if members.len() >= config.parallel_threshold {
        debug!(products = members.len(), "tokenizing catalog in parallel");
        return members
            .par_iter()
            .map(|&product| tokenize_description(product))
            .collect();
    }
    members
        .iter()
        .map(|&product| tokenize_description(product))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn tokenize_all<'a>(members: &[&'a Arc<Product>], _config: &CatalogConfig) -> Vec<Vec<&'a str>> {
    members
        .iter()
        .map(|&product| tokenize_description(product))
        .collect()
}
