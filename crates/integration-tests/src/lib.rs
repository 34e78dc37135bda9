//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_pricing` - Catalog fixtures through quotes and display views
//! - `session_flow` - Login, navigation guard and logout sequences
//!
//! Fixtures under `tests/fixtures/` are saved catalog API responses.

use vitrine_core::catalog::{Product, ProductPage};

/// Saved `/products/category/mens-shirts` response.
pub const MENS_SHIRTS_PAGE: &str = include_str!("../tests/fixtures/mens_shirts.json");

/// Saved `/products/{id}` response.
pub const PRODUCT_DETAIL: &str = include_str!("../tests/fixtures/product_84.json");

/// Parse the saved category page.
///
/// # Panics
///
/// Panics if the fixture is not a valid product page.
#[must_use]
#[allow(clippy::expect_used)]
pub fn mens_shirts_page() -> ProductPage {
    serde_json::from_str(MENS_SHIRTS_PAGE).expect("mens_shirts.json is a valid product page")
}

/// Parse the saved product detail.
///
/// # Panics
///
/// Panics if the fixture is not a valid product.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product_detail() -> Product {
    serde_json::from_str(PRODUCT_DETAIL).expect("product_84.json is a valid product")
}
