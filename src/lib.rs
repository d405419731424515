//! Case-insensitive, relevance-ranked product catalog lookup.
//!
//! A [`CatalogIndex`] is built once from a product collection and then
//! answers two kinds of question, alone or combined:
//!
//! - "which products are of these types?" (type filter)
//! - "which products mention these words, and how many of them?" (description
//!   scoring, ranked by hit count)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  source.rs  │────▶│   index.rs   │────▶│  search.rs  │
//! │ (Product-   │     │ (build,      │     │  (search,   │
//! │  Source)    │     │  from_parts) │     │ search_     │
//! └─────────────┘     └──────────────┘     │  scored)    │
//!                            │             └─────────────┘
//!                            ▼                    │
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │  keymap.rs   │     │ scoring.rs  │
//!                     │ (case-folded │     │  (rank)     │
//!                     │  keys)       │     └─────────────┘
//!                     └──────────────┘
//! ```
//!
//! `handle.rs` wraps an index for atomic swaps on refresh; `verify.rs` checks
//! structural invariants, mostly for hand-built fixtures.
//!
//! # Usage
//!
//! ```
//! use catalog_search::{CatalogIndex, Product};
//!
//! let index = CatalogIndex::build(vec![
//!     Product::new("X1", "GPU", "Nvidia 980"),
//!     Product::new("X2", "GPU", "AMD 970"),
//! ]);
//!
//! let results = index.search(&["980"], &["gpu"]);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].model, "X1");
//!
//! assert!(index.get_product("x2").is_some());
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod handle;
mod index;
pub mod keymap;
mod scoring;
mod search;
pub mod source;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use config::{CatalogConfig, TieBreak};
pub use error::{CatalogError, Result};
pub use handle::CatalogHandle;
pub use index::{tokenize_description, CatalogIndex, ProductBucket};
pub use keymap::{fold_key, CaseInsensitiveMap};
pub use scoring::{compare_scored, rank};
pub use source::{parse_products, JsonCatalog, ProductSource};
pub use types::{Product, ScoredProduct};
pub use verify::{find_violations, verify_index, InvariantError, VerificationReport};
