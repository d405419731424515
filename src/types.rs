// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a catalog index is built from and the values a search hands back.
//!
//! # Invariants
//!
//! - **Product**: immutable once built. `model` is the identity, compared
//!   case-insensitively by every index in this crate.
//!
//! - **ScoredProduct**: lives for a single search call. `hits` counts the
//!   description tags that matched the product during that call, nothing more.

use serde::{Deserialize, Serialize};

use crate::keymap::fold_key;

/// One catalog item.
///
/// Field order matters: the derived `Ord` (model, type, name) is the final
/// tie-breaker when ranking, so two distinct records never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog key (case-insensitive).
    pub model: String,
    /// Category, e.g. "GPU".
    #[serde(rename = "type")]
    pub product_type: String,
    /// Display name, e.g. "Nvidia 980".
    pub name: String,
}

impl Product {
    pub fn new(
        model: impl Into<String>,
        product_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            product_type: product_type.into(),
            name: name.into(),
        }
    }

    /// The string description tokens are cut from: `name + " " + type`.
    pub fn description(&self) -> String {
        format!("{} {}", self.name, self.product_type)
    }

    /// Case-folded model, the form every lookup compares on.
    #[inline]
    pub fn folded_model(&self) -> String {
        fold_key(&self.model)
    }
}

/// A product paired with its hit count for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub hits: u32,
}

impl<'a> ScoredProduct<'a> {
    #[inline]
    pub fn new(product: &'a Product, hits: u32) -> Self {
        Self { product, hits }
    }
}
