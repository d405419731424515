//! Searching an index assembled from hand-built maps.

use super::common::{gpu_fixture, gpu_fixture_parts, hits, models, NO_TAGS};
use catalog_search::{verify_index, CatalogError, CatalogIndex};

#[test]
fn fixture_matches_built_index() {
    let fixture = gpu_fixture();
    assert!(verify_index(&fixture).is_ok());

    assert_eq!(
        hits(&fixture.search_scored(&["980"], &["GPU"])),
        vec![("X1".to_string(), 1)]
    );
    assert_eq!(models(&fixture.search(NO_TAGS, &["gpu"])), vec!["X1", "X2"]);
}

#[test]
fn fixture_lookup_ignores_case() {
    let fixture = gpu_fixture();
    assert_eq!(fixture.get_product("x2").map(|p| p.name.as_str()), Some("AMD 970"));
    assert!(fixture.get_product("X9").is_none());
}

#[test]
fn fixture_with_missing_map_is_rejected() {
    let (products, types, _) = gpu_fixture_parts();
    let err = CatalogIndex::from_parts(Some(products), Some(types), None).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

#[test]
fn fixture_keys_drive_search() {
    let (products, mut types, descriptions) = gpu_fixture_parts();
    // Re-file both cards under a type they do not carry.
    let cards = types.remove("GPU").unwrap();
    types.insert("Graphics".to_string(), cards);

    let index =
        CatalogIndex::from_parts(Some(products), Some(types), Some(descriptions)).unwrap();

    assert_eq!(index.search(NO_TAGS, &["graphics"]).len(), 2);
    assert!(index.search(NO_TAGS, &["GPU"]).is_empty());
    assert!(verify_index(&index).is_err());
}
