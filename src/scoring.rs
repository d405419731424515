// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored products get sorted.
//!
//! Hit count dominates. A product matching three description tags always
//! beats one matching two. What happens between equal hit counts depends on
//! [`TieBreak`]:
//!
//! - `Model`: ascending case-folded model, then the whole record. Two calls
//!   over the same index always agree on order.
//! - `Unspecified`: the sort is stable, so equal-hit products keep the order
//!   the working score map produced them in. That order is a `HashMap`
//!   iteration order and carries no meaning.

use std::cmp::Ordering;

use crate::config::TieBreak;
use crate::types::ScoredProduct;

/// Compare two scored products for ranking.
///
/// Sort order:
/// 1. **Hits** - descending
/// 2. **Model** - case-folded, ascending (`TieBreak::Model` only)
/// 3. **Record** - `Product`'s derived order, so distinct products never tie
///    (`TieBreak::Model` only)
pub fn compare_scored(a: &ScoredProduct<'_>, b: &ScoredProduct<'_>, tie_break: TieBreak) -> Ordering {
    match b.hits.cmp(&a.hits) {
        Ordering::Equal => match tie_break {
            TieBreak::Unspecified => Ordering::Equal,
            TieBreak::Model => match a.product.folded_model().cmp(&b.product.folded_model()) {
                Ordering::Equal => a.product.cmp(b.product),
                ord => ord,
            },
        },
        ord => ord,
    }
}

/// Sort in place, best first. Stable.
pub fn rank(scored: &mut [ScoredProduct<'_>], tie_break: TieBreak) {
    scored.sort_by(|a, b| compare_scored(a, b, tie_break));
}
