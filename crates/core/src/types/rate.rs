//! Exchange rate between the base currency and another currency.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Units of the quote currency bought by one unit of [`Currency::BASE`].
///
/// A rate of `5.0` means one US dollar is worth five reais. Rates are always
/// supplied from outside the core, typically from configuration.
///
/// [`Currency::BASE`]: crate::Currency::BASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Create a rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidRate`] if `rate` is zero or negative.
    pub fn new(rate: Decimal) -> Result<Self, PricingError> {
        if rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(rate));
        }
        Ok(Self(rate))
    }

    /// The multiplicative factor.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = PricingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}
