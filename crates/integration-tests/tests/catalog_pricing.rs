//! Integration tests for catalog records flowing through the pricing
//! calculator into display views.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitrine_core::catalog::{
    Category, DisplayOptions, ProductCard, ProductDetail, StockStatus, api_url,
};
use vitrine_core::pricing::{self, PriceQuote};
use vitrine_core::{Currency, ExchangeRate, Locale, PricingError, ProductId};
use vitrine_integration_tests::{mens_shirts_page, product_detail};

fn rate() -> ExchangeRate {
    ExchangeRate::new(dec!(5.0)).unwrap()
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_page_parses_with_optional_fields() {
    let page = mens_shirts_page();
    assert_eq!(page.products.len(), 3);
    assert_eq!(page.total, 5);

    let plaid = &page.products[2];
    assert_eq!(plaid.discount_percentage, None);
    assert_eq!(plaid.brand, None);
    assert_eq!(plaid.stock_status(), StockStatus::SoldOut);
}

#[test]
fn test_cards_round_discounts_consistently() {
    let options = DisplayOptions::new(Locale::EnUs);
    let badges: Vec<Option<String>> = mens_shirts_page()
        .products
        .iter()
        .map(|product| ProductCard::build(product, &options).unwrap().discount_badge)
        .collect();

    assert_eq!(
        badges,
        vec![Some("-15%".to_owned()), Some("-13%".to_owned()), None]
    );
}

#[test]
fn test_cards_in_reais() {
    let options = DisplayOptions::new(Locale::PtBr).with_conversion(Currency::Brl, rate());
    let prices: Vec<String> = mens_shirts_page()
        .products
        .iter()
        .map(|product| ProductCard::build(product, &options).unwrap().price)
        .collect();

    assert_eq!(
        prices,
        vec![
            "R$\u{a0}149,95".to_owned(),
            "R$\u{a0}124,95".to_owned(),
            "R$\u{a0}174,95".to_owned(),
        ]
    );
}

#[test]
fn test_every_original_price_is_at_least_current() {
    for product in mens_shirts_page().products {
        let quote = product.price_quote().unwrap();
        assert!(quote.original_price().amount() >= quote.current_price().amount());
        if quote.has_discount() {
            assert!(quote.original_price().amount() > quote.current_price().amount());
        }
    }
}

// =============================================================================
// Detail
// =============================================================================

#[test]
fn test_detail_in_dollars() {
    let options = DisplayOptions::new(Locale::EnUs);
    let detail = ProductDetail::build(&product_detail(), &options).unwrap();

    assert_eq!(detail.card.id, ProductId::new(84));
    assert_eq!(detail.card.price, "$19.99");
    assert_eq!(detail.card.discount_badge.as_deref(), Some("-10%"));
    assert_eq!(detail.original_price.as_deref(), Some("$22.21"));
    assert_eq!(detail.stock_label, "2 in stock");
    assert_eq!(detail.images.len(), 5);
    assert_eq!(detail.dimensions.as_deref(), Some("23.46 x 25.72 x 11.69 cm"));
}

#[test]
fn test_detail_in_reais() {
    let options = DisplayOptions::new(Locale::PtBr).with_conversion(Currency::Brl, rate());
    let detail = ProductDetail::build(&product_detail(), &options).unwrap();

    assert_eq!(detail.card.price, "R$\u{a0}99,95");
    assert_eq!(detail.original_price.as_deref(), Some("R$\u{a0}111,06"));
    assert_eq!(detail.stock_label, "2 em estoque");

    let rendered = detail.to_string();
    assert!(rendered.contains("De: R$\u{a0}111,06"));
    assert!(rendered.contains("Categoria"));
}

#[test]
fn test_quote_matches_free_functions() {
    let product = product_detail();
    let quote = product.price_quote().unwrap();

    let discount = pricing::round_discount(product.discount_percentage);
    let original = pricing::derive_original_price(product.price, discount).unwrap();
    assert_eq!(quote.original_price().amount(), original);

    let brl = pricing::convert(product.price, "USD", "BRL", dec!(5.0)).unwrap();
    let converted = quote.convert_to(Currency::Brl, rate()).unwrap();
    assert_eq!(converted.current_price().amount(), brl);
}

#[test]
fn test_corrupted_discount_is_rejected_not_clamped() {
    let mut product = product_detail();
    product.discount_percentage = Some(dec!(100));
    assert_eq!(
        ProductDetail::build(&product, &DisplayOptions::default()),
        Err(PricingError::InvalidDiscount(100))
    );

    product.discount_percentage = Some(dec!(-3));
    assert_eq!(
        product.price_quote(),
        Err(PricingError::InvalidDiscount(-3))
    );
}

// =============================================================================
// Pricing round trips
// =============================================================================

#[test]
fn test_round_trip_through_reais() {
    let usd = dec!(123.45);
    let brl = pricing::convert(usd, "USD", "BRL", dec!(5.0)).unwrap();
    let back = pricing::convert(brl, "BRL", "USD", dec!(5.0)).unwrap();
    assert!((back - usd).abs() < dec!(0.000000001));
}

#[test]
fn test_quote_from_raw_matches_catalog_quote() {
    let product = product_detail();
    let direct = PriceQuote::from_raw(product.price, product.discount_percentage, Currency::Usd);
    assert_eq!(direct, product.price_quote());
}

#[test]
fn test_zero_price_product() {
    let quote = PriceQuote::from_raw(Decimal::ZERO, Some(dec!(50)), Currency::Usd).unwrap();
    assert_eq!(quote.original_price().amount(), Decimal::ZERO);
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_category_urls() {
    let category = Category::default();
    assert_eq!(
        api_url(&category.path()),
        "https://dummyjson.com/products/category/mens-shirts"
    );
    assert_eq!(Category::browsable().len(), 6);
}
