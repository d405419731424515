// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checking a catalog index against its structural invariants.
//!
//! `CatalogIndex::build` satisfies these by construction. Fixture indices
//! from `from_parts` are taken on trust, so tests that want a well-formed
//! fixture call [`verify_index`] on it.
//!
//! | Check                 | Holds when                                         |
//! |-----------------------|----------------------------------------------------|
//! | model keys            | each `products` key is its product's folded model  |
//! | one type bucket       | each product sits in exactly one type bucket       |
//! | type bucket key       | ...and that bucket is keyed by its folded type     |
//! | token buckets         | each product sits in the bucket of each token      |
//! | known members         | every bucket member is the product stored under its model |
//! | no empty buckets      | every bucket has at least one member               |

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::index::{tokenize_description, CatalogIndex, ProductBucket};
use crate::keymap::{fold_key, CaseInsensitiveMap};
use crate::types::Product;

/// Which index a bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKind {
    Type,
    Description,
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKind::Type => write!(f, "typeMap"),
            BucketKind::Description => write!(f, "descriptionMap"),
        }
    }
}

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvariantError {
    /// A `products` key does not fold to the stored product's model.
    ModelKeyMismatch { key: String, model: String },
    /// Product is in no type bucket.
    MissingTypeBucket { model: String },
    /// Product is in several type buckets.
    DuplicateTypeBuckets { model: String, buckets: Vec<String> },
    /// Product's only type bucket is keyed by something other than its type.
    MisfiledType { model: String, bucket: String },
    /// Product is absent from the bucket of one of its tokens.
    MissingToken { model: String, token: String },
    /// Bucket holds a product that `products` does not.
    UnknownBucketMember {
        kind: BucketKind,
        key: String,
        model: String,
    },
    /// Bucket with no products.
    EmptyBucket { kind: BucketKind, key: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ModelKeyMismatch { key, model } => {
                write!(f, "products key '{}' holds model '{}'", key, model)
            }
            InvariantError::MissingTypeBucket { model } => {
                write!(f, "product '{}' is in no type bucket", model)
            }
            InvariantError::DuplicateTypeBuckets { model, buckets } => {
                write!(
                    f,
                    "product '{}' is in {} type buckets: {}",
                    model,
                    buckets.len(),
                    buckets.join(", ")
                )
            }
            InvariantError::MisfiledType { model, bucket } => {
                write!(f, "product '{}' is filed under type '{}'", model, bucket)
            }
            InvariantError::MissingToken { model, token } => {
                write!(f, "product '{}' missing from token bucket '{}'", model, token)
            }
            InvariantError::UnknownBucketMember { kind, key, model } => {
                write!(f, "{}['{}'] holds unknown product '{}'", kind, key, model)
            }
            InvariantError::EmptyBucket { kind, key } => {
                write!(f, "{}['{}'] is empty", kind, key)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Summary of a clean verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerificationReport {
    pub products: usize,
    pub type_buckets: usize,
    pub description_buckets: usize,
    /// Total bucket memberships across both maps.
    pub bucket_entries: usize,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} products, {} type buckets, {} description buckets, {} bucket entries",
            self.products, self.type_buckets, self.description_buckets, self.bucket_entries
        )
    }
}

/// Verify every invariant, stopping at the first violation.
pub fn verify_index(index: &CatalogIndex) -> Result<VerificationReport, InvariantError> {
    if let Some(first) = find_violations(index).into_iter().next() {
        return Err(first);
    }

    let entries = |map: &CaseInsensitiveMap<ProductBucket>| -> usize {
        map.values().map(|bucket| bucket.len()).sum()
    };

    Ok(VerificationReport {
        products: index.products.len(),
        type_buckets: index.type_map.len(),
        description_buckets: index.description_map.len(),
        bucket_entries: entries(&index.type_map) + entries(&index.description_map),
    })
}

/// Every violation in the index, sorted.
pub fn find_violations(index: &CatalogIndex) -> Vec<InvariantError> {
    let mut violations = Vec::new();

    for (key, product) in index.products.iter() {
        if key != fold_key(&product.model) {
            violations.push(InvariantError::ModelKeyMismatch {
                key: key.to_string(),
                model: product.model.clone(),
            });
        }
    }

    let mut type_membership: HashMap<&Product, Vec<&str>> = HashMap::new();
    for (key, bucket) in index.type_map.iter() {
        for product in bucket.iter().map(Arc::as_ref) {
            type_membership.entry(product).or_default().push(key);
        }
    }

    for product in index.products.values().map(Arc::as_ref) {
        match type_membership.get(product).map(Vec::as_slice) {
            None | Some([]) => violations.push(InvariantError::MissingTypeBucket {
                model: product.model.clone(),
            }),
            Some([bucket]) => {
                if *bucket != fold_key(&product.product_type) {
                    violations.push(InvariantError::MisfiledType {
                        model: product.model.clone(),
                        bucket: bucket.to_string(),
                    });
                }
            }
            Some(buckets) => {
                let mut buckets: Vec<String> = buckets.iter().map(|b| b.to_string()).collect();
                buckets.sort();
                violations.push(InvariantError::DuplicateTypeBuckets {
                    model: product.model.clone(),
                    buckets,
                });
            }
        }

        for token in tokenize_description(product) {
            let present = index
                .description_map
                .get(token)
                .is_some_and(|bucket| bucket.contains(product));
            if !present {
                violations.push(InvariantError::MissingToken {
                    model: product.model.clone(),
                    token: fold_key(token),
                });
            }
        }
    }

    check_buckets(index, BucketKind::Type, &index.type_map, &mut violations);
    check_buckets(
        index,
        BucketKind::Description,
        &index.description_map,
        &mut violations,
    );

    violations.sort();
    violations.dedup();
    violations
}

fn check_buckets(
    index: &CatalogIndex,
    kind: BucketKind,
    map: &CaseInsensitiveMap<ProductBucket>,
    violations: &mut Vec<InvariantError>,
) {
    for (key, bucket) in map.iter() {
        if bucket.is_empty() {
            violations.push(InvariantError::EmptyBucket {
                kind,
                key: key.to_string(),
            });
        }
        for product in bucket.iter().map(Arc::as_ref) {
            if index.get_product(&product.model) != Some(product) {
                violations.push(InvariantError::UnknownBucketMember {
                    kind,
                    key: key.to_string(),
                    model: product.model.clone(),
                });
            }
        }
    }
}
