// src/filter.rs

//! Case-insensitive product name filtering.

use crate::models::Product;

/// Keep the products whose name contains `filter_by`, ignoring case.
///
/// Relative order is preserved and the source slice is never touched. An
/// empty filter returns the whole collection.
pub fn perform_filter(products: &[Product], filter_by: &str) -> Vec<Product> {
    if filter_by.is_empty() {
        return products.to_vec();
    }

    let needle = filter_by.to_lowercase();
    products
        .iter()
        .filter(|product| product.product_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
