//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Product;

/// Create a product. Argument order follows the record: model, type, name.
pub fn make_product(model: &str, product_type: &str, name: &str) -> Product {
    Product::new(model, product_type, name)
}

/// The two-card catalog used throughout the docs and tests:
/// `X1` (GPU, "Nvidia 980") and `X2` (GPU, "AMD 970").
pub fn gpu_catalog() -> Vec<Product> {
    vec![
        make_product("X1", "GPU", "Nvidia 980"),
        make_product("X2", "GPU", "AMD 970"),
    ]
}

/// A mixed catalog spanning several types with overlapping name tokens.
pub fn mixed_catalog() -> Vec<Product> {
    vec![
        make_product("X1", "GPU", "Nvidia GeForce 980"),
        make_product("X2", "GPU", "AMD Radeon 970"),
        make_product("X3", "GPU", "Nvidia GeForce 1080 Ti"),
        make_product("C1", "CPU", "Intel Core i7 980"),
        make_product("C2", "CPU", "AMD Ryzen 7"),
        make_product("M1", "Motherboard", "ASUS Z170 Intel"),
        make_product("S1", "Solid State Drive", "Samsung 850 Evo"),
    ]
}
