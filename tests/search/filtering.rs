//! How the type filter and description filter switch on and combine.

use super::common::{build_mixed, hits, model_set, NO_TAGS};

// ============================================================================
// TYPE FILTER
// ============================================================================

#[test]
fn type_filter_returns_only_requested_types() {
    let index = build_mixed();
    assert_eq!(
        model_set(&index.search(NO_TAGS, &["cpu"])),
        vec!["C1", "C2"]
    );
}

#[test]
fn several_type_tags_union_their_buckets() {
    let index = build_mixed();
    assert_eq!(
        model_set(&index.search(NO_TAGS, &["CPU", "Motherboard"])),
        vec!["C1", "C2", "M1"]
    );
}

#[test]
fn multi_word_type_matches_whole() {
    let index = build_mixed();
    assert_eq!(
        model_set(&index.search(NO_TAGS, &["solid state drive"])),
        vec!["S1"]
    );
    // A single word of the type is not a type.
    assert!(index.search(NO_TAGS, &["solid"]).is_empty());
}

#[test]
fn type_tags_matching_nothing_do_not_filter() {
    let index = build_mixed();
    // "Keyboard" is no type, so "980" matches across all types.
    assert_eq!(
        model_set(&index.search(&["980"], &["Keyboard", ""])),
        vec!["C1", "X1"]
    );
}

#[test]
fn one_matching_type_tag_is_enough_to_filter() {
    let index = build_mixed();
    assert_eq!(
        model_set(&index.search(&["980"], &["Keyboard", "GPU"])),
        vec!["X1"]
    );
}

// ============================================================================
// DESCRIPTION FILTER
// ============================================================================

#[test]
fn description_tag_matches_type_words_too() {
    let index = build_mixed();
    // Type words are part of the description string.
    assert_eq!(
        model_set(&index.search(&["state"], NO_TAGS)),
        vec!["S1"]
    );
}

#[test]
fn description_tokens_are_whole_words() {
    let index = build_mixed();
    assert!(index.search(&["Geforc"], NO_TAGS).is_empty());
    assert!(index.search(&["98"], NO_TAGS).is_empty());
}

#[test]
fn whitespace_tag_counts_as_a_filter() {
    let index = build_mixed();
    // Not empty, so it switches the description filter on, but matches nothing.
    assert!(index.search(&[" "], &["GPU"]).is_empty());
}

#[test]
fn empty_tags_mixed_with_real_ones_are_ignored() {
    let index = build_mixed();
    let scored = index.search_scored(&["", "ryzen", ""], NO_TAGS);
    assert_eq!(hits(&scored), vec![("C2".to_string(), 1)]);
}

#[test]
fn description_cannot_add_products_outside_type_filter() {
    let index = build_mixed();
    // "intel" matches C1 and M1, but only CPUs are allowed in.
    let scored = index.search_scored(&["intel"], &["CPU"]);
    assert_eq!(hits(&scored), vec![("C1".to_string(), 1)]);
}

#[test]
fn unmatched_tag_alongside_matched_tag_keeps_matches() {
    let index = build_mixed();
    assert_eq!(
        model_set(&index.search(&["nonexistent", "evo"], NO_TAGS)),
        vec!["S1"]
    );
}
