//! Errors raised by pricing arithmetic and money validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when validating or computing prices.
///
/// Every variant describes bad input supplied by the caller. None of them
/// are transient, so retrying the same call always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Discount percentage is negative or not below 100.
    #[error("discount must be in [0, 100), got {0}")]
    InvalidDiscount(i64),

    /// Exchange rate is zero or negative.
    #[error("exchange rate must be greater than zero, got {0}")]
    InvalidRate(Decimal),

    /// Currency code outside the supported set.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Locale tag outside the supported set.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Monetary amount is negative.
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Result does not fit in a decimal.
    #[error("arithmetic overflow while computing a price")]
    Overflow,
}
