//! Ranking by hit count and the model tie-break.

use super::common::{build_mixed, hits, make_product, models, NO_TAGS};
use catalog_search::{CatalogConfig, CatalogIndex, TieBreak};

#[test]
fn more_matching_tags_rank_higher() {
    let index = build_mixed();
    let scored = index.search_scored(&["nvidia", "geforce", "1080"], NO_TAGS);

    assert_eq!(
        hits(&scored),
        vec![("X3".to_string(), 3), ("X1".to_string(), 2)]
    );
}

#[test]
fn equal_hits_order_by_model_ignoring_case() {
    let index = CatalogIndex::build(vec![
        make_product("b-200", "Cable", "HDMI"),
        make_product("A-300", "Cable", "HDMI"),
        make_product("c-100", "Cable", "HDMI"),
    ]);

    assert_eq!(
        models(&index.search(&["hdmi"], NO_TAGS)),
        vec!["A-300", "b-200", "c-100"]
    );
}

#[test]
fn type_only_results_are_all_tied_at_zero() {
    let index = build_mixed();
    let scored = index.search_scored(NO_TAGS, &["GPU"]);

    assert!(scored.iter().all(|s| s.hits == 0));
    assert_eq!(
        scored.iter().map(|s| s.product.model.as_str()).collect::<Vec<_>>(),
        vec!["X1", "X2", "X3"]
    );
}

#[test]
fn hits_then_model_across_types() {
    let index = build_mixed();
    let scored = index.search_scored(&["amd", "intel", "980"], NO_TAGS);

    assert_eq!(
        hits(&scored),
        vec![
            ("C1".to_string(), 2),
            ("C2".to_string(), 1),
            ("M1".to_string(), 1),
            ("X1".to_string(), 1),
            ("X2".to_string(), 1),
        ]
    );
}

#[test]
fn max_results_caps_ranked_list() {
    let index = build_mixed()
        .with_config(CatalogConfig {
            max_results: Some(2),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        models(&index.search(&["amd", "intel", "980"], NO_TAGS)),
        vec!["C1", "C2"]
    );
}

#[test]
fn unspecified_tie_break_still_orders_by_hits() {
    let index = build_mixed()
        .with_config(CatalogConfig {
            tie_break: TieBreak::Unspecified,
            ..Default::default()
        })
        .unwrap();

    let scored = index.search_scored(&["amd", "intel", "980"], NO_TAGS);
    assert_eq!(scored[0].product.model, "C1");
    assert_eq!(scored.len(), 5);
    assert!(scored[1..].iter().all(|s| s.hits == 1));
}
