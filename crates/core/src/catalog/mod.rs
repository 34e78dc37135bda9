//! Catalog records as served by the `DummyJSON` products API.
//!
//! These types mirror the JSON payloads of `/products/{id}` and
//! `/products/category/{slug}`. Fetching them is the caller's job; this
//! module only describes their shape and derives display values from them.

mod category;
mod view;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::pricing::PriceQuote;
use crate::types::{Currency, Locale, ProductId};

pub use category::{Category, DEFAULT_CATEGORY, MENS_CATEGORIES, WOMENS_CATEGORIES};
pub use view::{
    Conversion, DisplayOptions, MAX_EXTRA_IMAGES, ProductCard, ProductDetail, empty_listing_label,
};

/// Base URL of the public catalog API.
pub const API_BASE_URL: &str = "https://dummyjson.com";

// =============================================================================
// Records
// =============================================================================

/// A product record.
///
/// `price` is in [`Currency::BASE`]. `discount_percentage` is the raw
/// catalog value and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category slug, e.g. `mens-shirts`.
    #[serde(default)]
    pub category: String,
    /// Current selling price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Raw discount percentage, not yet rounded.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_percentage: Option<Decimal>,
    /// Average rating out of five.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    /// Units available.
    #[serde(default)]
    pub stock: i64,
    /// Brand name; some catalog entries have none.
    #[serde(default)]
    pub brand: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Shipping weight in grams.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Package dimensions in centimetres.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// Package dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width.
    #[serde(with = "rust_decimal::serde::float")]
    pub width: Decimal,
    /// Height.
    #[serde(with = "rust_decimal::serde::float")]
    pub height: Decimal,
    /// Depth.
    #[serde(with = "rust_decimal::serde::float")]
    pub depth: Decimal,
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Total products matching the query.
    #[serde(default)]
    pub total: u32,
    /// Products skipped before this page.
    #[serde(default)]
    pub skip: u32,
    /// Page size requested.
    #[serde(default)]
    pub limit: u32,
}

impl Product {
    /// Price quote in the catalog currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the record carries a negative price or an
    /// out-of-range discount.
    pub fn price_quote(&self) -> Result<PriceQuote, PricingError> {
        PriceQuote::from_raw(self.price, self.discount_percentage, Currency::BASE)
    }

    /// Stock availability.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_count(self.stock)
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Whether a product can be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "count")]
pub enum StockStatus {
    /// At least one unit available.
    InStock(u64),
    /// Nothing left.
    SoldOut,
}

impl StockStatus {
    /// Classify a raw stock count. Zero and negative counts are sold out.
    #[must_use]
    pub const fn from_count(count: i64) -> Self {
        if count > 0 {
            Self::InStock(count.unsigned_abs())
        } else {
            Self::SoldOut
        }
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::InStock(_))
    }

    /// Label shown on the product detail screen.
    #[must_use]
    pub fn label(self, locale: Locale) -> String {
        match (self, locale) {
            (Self::InStock(count), Locale::PtBr) => format!("{count} em estoque"),
            (Self::InStock(count), Locale::EnUs) => format!("{count} in stock"),
            (Self::SoldOut, Locale::PtBr) => "Esgotado".to_owned(),
            (Self::SoldOut, Locale::EnUs) => "Sold out".to_owned(),
        }
    }
}

// =============================================================================
// Paths
// =============================================================================

/// API path listing the products of a category.
#[must_use]
pub fn category_path(slug: &str) -> String {
    format!("/products/category/{slug}")
}

/// API path of a single product.
#[must_use]
pub fn product_path(id: ProductId) -> String {
    format!("/products/{id}")
}

/// Absolute URL for an API path.
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}
