//! Type-safe money representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::pricing::format::format_amount;
use crate::types::{Currency, Locale};

/// A non-negative amount in a supported currency.
///
/// Amounts are kept in the currency's standard unit (dollars, not cents) at
/// full precision; rounding to two places happens only when formatting.
///
/// ```
/// use rust_decimal::Decimal;
/// use vitrine_core::{Currency, Locale, Money};
///
/// let price = Money::new(Decimal::new(1999, 2), Currency::Usd).unwrap();
/// assert_eq!(price.format(Locale::EnUs), "$19.99");
///
/// assert!(Money::new(Decimal::NEGATIVE_ONE, Currency::Usd).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedMoney")]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NegativeAmount`] if `amount` is below zero.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, PricingError> {
        ensure_non_negative(amount)?;
        Ok(Self { amount, currency })
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The amount in the currency's standard unit.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Render with two fractional digits using `locale` conventions.
    #[must_use]
    pub fn format(&self, locale: Locale) -> String {
        format_amount(self.amount, self.currency, locale)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Reject amounts below zero.
pub(crate) fn ensure_non_negative(amount: Decimal) -> Result<(), PricingError> {
    if amount < Decimal::ZERO {
        return Err(PricingError::NegativeAmount(amount));
    }
    Ok(())
}

#[derive(Deserialize)]
struct UncheckedMoney {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<UncheckedMoney> for Money {
    type Error = PricingError;

    fn try_from(value: UncheckedMoney) -> Result<Self, Self::Error> {
        Self::new(value.amount, value.currency)
    }
}
