//! Building an index from product collections.

use super::common::{make_product, mixed_catalog, model_set, NO_TAGS};
use catalog_search::{verify_index, CatalogConfig, CatalogIndex, Product};

#[test]
fn every_product_lands_in_its_type_and_tokens() {
    let index = CatalogIndex::build(mixed_catalog());

    assert_eq!(index.len(), 7);
    let mut types: Vec<&str> = index.types().collect();
    types.sort_unstable();
    assert_eq!(types, vec!["cpu", "gpu", "motherboard", "solid state drive"]);

    for product in mixed_catalog() {
        assert!(index
            .products_of_type(&product.product_type)
            .any(|p| p == &product));
        for token in catalog_search::tokenize_description(&product) {
            assert!(
                index.products_with_token(token).any(|p| p == &product),
                "{} missing from token {}",
                product.model,
                token
            );
        }
    }
}

#[test]
fn empty_catalog_builds_empty_index() {
    let index = CatalogIndex::build(Vec::<Product>::new());
    assert!(index.is_empty());
    assert_eq!(index.types().count(), 0);
    assert_eq!(index.tokens().count(), 0);
}

#[test]
fn later_duplicate_replaces_earlier_everywhere() {
    let index = CatalogIndex::build(vec![
        make_product("SKU-1", "Mouse", "Logitech MX"),
        make_product("sku-1", "Keyboard", "Logitech K120"),
    ]);

    assert_eq!(index.len(), 1);
    assert_eq!(index.get_product("SKU-1").unwrap().product_type, "Keyboard");
    assert!(index.search(NO_TAGS, &["mouse"]).is_empty());
    assert!(index.search(&["mx"], NO_TAGS).is_empty());
    assert_eq!(model_set(&index.search(&["logitech"], NO_TAGS)), vec!["sku-1"]);
    assert!(verify_index(&index).is_ok());
}

#[test]
fn products_sharing_a_type_share_one_bucket() {
    let index = CatalogIndex::build(vec![
        make_product("A", "gpu", "one"),
        make_product("B", "GPU", "two"),
    ]);

    assert_eq!(index.types().count(), 1);
    assert_eq!(index.products_of_type("Gpu").count(), 2);
}

#[test]
fn blank_name_still_indexes_type_tokens() {
    let index = CatalogIndex::build(vec![make_product("A", "Power Supply", "   ")]);

    assert_eq!(model_set(&index.search(&["supply"], NO_TAGS)), vec!["A"]);
    assert!(index.search(&[""], NO_TAGS).is_empty());
}

#[test]
fn parallel_and_sequential_builds_answer_alike() {
    let catalog: Vec<Product> = (0..200)
        .map(|i| {
            make_product(
                &format!("P{:03}", i),
                ["GPU", "CPU", "RAM"][i % 3],
                &format!("part {} rev{}", i % 11, i % 5),
            )
        })
        .collect();

    let sequential = CatalogIndex::build_with_config(
        catalog.clone(),
        CatalogConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        },
    )
    .unwrap();
    let parallel = CatalogIndex::build_with_config(
        catalog,
        CatalogConfig {
            parallel_threshold: 1,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(verify_index(&parallel).is_ok());
    for (description, types) in [
        (vec!["part", "3"], vec!["GPU"]),
        (vec!["rev1"], vec![]),
        (vec![], vec!["RAM"]),
    ] {
        assert_eq!(
            sequential.search(&description, &types),
            parallel.search(&description, &types)
        );
    }
}
