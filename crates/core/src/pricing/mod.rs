//! Pricing calculator.
//!
//! Pure functions over prices and discounts: rounding raw catalog discounts,
//! recovering the pre-discount price, converting between currencies and
//! formatting amounts for display.
//!
//! The string-taking entry points ([`convert`], [`format_currency`]) validate
//! raw caller input; the typed helpers they delegate to are used by
//! [`PriceQuote`] and the catalog views.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use vitrine_core::pricing;
//!
//! let current = Decimal::from(90);
//! let original = pricing::derive_original_price(current, 10).unwrap();
//! assert_eq!(original, Decimal::from(100));
//!
//! let brl = pricing::convert(Decimal::from(100), "USD", "BRL", Decimal::from(5)).unwrap();
//! assert_eq!(pricing::format_currency(brl, "BRL", "pt-BR").unwrap(), "R$\u{a0}500,00");
//! ```

pub(crate) mod format;
mod quote;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PricingError;
use crate::types::money::ensure_non_negative;
use crate::types::{Currency, DiscountPercent, ExchangeRate, Locale};

use format::format_amount;

pub use quote::PriceQuote;

/// Round a raw discount percentage to a whole number, half away from zero.
///
/// An absent discount is zero. No range check happens here; out-of-range
/// results are rejected by [`derive_original_price`] and
/// [`DiscountPercent::new`]. Values beyond the `i64` range saturate.
#[must_use]
pub fn round_discount(raw_percentage: Option<Decimal>) -> i64 {
    let Some(raw) = raw_percentage else {
        return 0;
    };
    let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Recover the price before a discount was applied.
///
/// A zero discount returns `current_price` unchanged. Otherwise the result is
/// `current_price / (1 - discount / 100)`, which is never below
/// `current_price`.
///
/// The result is strictly greater than a non-zero `current_price` as long as
/// the quotient has a digit to spare within 28 decimal places. Prices at the
/// last representable place (e.g. `1e-28`) come back unchanged.
///
/// # Errors
///
/// - [`PricingError::InvalidDiscount`] if `discount_percent` is negative or
///   at least 100. The value is never clamped.
/// - [`PricingError::NegativeAmount`] if `current_price` is negative.
/// - [`PricingError::Overflow`] if the result does not fit in a decimal.
pub fn derive_original_price(
    current_price: Decimal,
    discount_percent: i64,
) -> Result<Decimal, PricingError> {
    ensure_non_negative(current_price)?;
    let discount = DiscountPercent::new(discount_percent)?;
    original_amount(current_price, discount)
}

/// Typed core of [`derive_original_price`].
pub(crate) fn original_amount(
    current_price: Decimal,
    discount: DiscountPercent,
) -> Result<Decimal, PricingError> {
    if discount.is_zero() {
        return Ok(current_price);
    }
    current_price
        .checked_div(Decimal::ONE - discount.fraction())
        .ok_or(PricingError::Overflow)
}

/// Convert `amount` from one currency code to another.
///
/// `rate` is the number of `BRL` per `USD`: converting away from the base
/// currency multiplies, converting back divides. Converting a currency to
/// itself returns `amount` unchanged.
///
/// # Errors
///
/// - [`PricingError::InvalidRate`] if `rate` is zero or negative.
/// - [`PricingError::NegativeAmount`] if `amount` is negative.
/// - [`PricingError::UnsupportedCurrency`] for codes other than `USD`/`BRL`.
pub fn convert(
    amount: Decimal,
    from_currency: &str,
    to_currency: &str,
    rate: Decimal,
) -> Result<Decimal, PricingError> {
    let rate = ExchangeRate::new(rate)?;
    ensure_non_negative(amount)?;
    let from: Currency = from_currency.parse()?;
    let to: Currency = to_currency.parse()?;
    convert_amount(amount, from, to, rate)
}

/// Typed core of [`convert`].
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the converted amount does not fit.
pub fn convert_amount(
    amount: Decimal,
    from: Currency,
    to: Currency,
    rate: ExchangeRate,
) -> Result<Decimal, PricingError> {
    if from == to {
        return Ok(amount);
    }
    let converted = if from == Currency::BASE {
        amount.checked_mul(rate.value())
    } else {
        amount.checked_div(rate.value())
    };
    converted.ok_or(PricingError::Overflow)
}

/// Render `amount` with two fractional digits and the currency's symbol and
/// placement for `locale`.
///
/// # Errors
///
/// - [`PricingError::UnsupportedCurrency`] for codes other than `USD`/`BRL`.
/// - [`PricingError::UnsupportedLocale`] for tags other than `en-US`/`pt-BR`.
/// - [`PricingError::NegativeAmount`] if `amount` is negative.
pub fn format_currency(
    amount: Decimal,
    currency_code: &str,
    locale: &str,
) -> Result<String, PricingError> {
    let currency: Currency = currency_code.parse()?;
    let locale: Locale = locale.parse()?;
    ensure_non_negative(amount)?;
    Ok(format_amount(amount, currency, locale))
}

/// Convert a dollar amount to reais and format it for Brazilian display.
///
/// # Errors
///
/// Same as [`convert_amount`], plus [`PricingError::NegativeAmount`].
pub fn usd_to_brl_formatted(
    usd_amount: Decimal,
    rate: ExchangeRate,
) -> Result<String, PricingError> {
    ensure_non_negative(usd_amount)?;
    let brl = convert_amount(usd_amount, Currency::Usd, Currency::Brl, rate)?;
    Ok(format_amount(brl, Currency::Brl, Locale::PtBr))
}
