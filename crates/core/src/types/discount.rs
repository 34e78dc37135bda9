//! Discount percentage.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::pricing::round_discount;

/// Whole-number percentage removed from an original price, in `[0, 100)`.
///
/// Zero means the product is not discounted. 100 is rejected because the
/// original price could not be recovered from a free item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(0);

    /// Exclusive upper bound.
    pub const LIMIT: i64 = 100;

    /// Create a discount from a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDiscount`] if `percent` is negative or
    /// at least 100.
    pub fn new(percent: i64) -> Result<Self, PricingError> {
        if !(0..Self::LIMIT).contains(&percent) {
            return Err(PricingError::InvalidDiscount(percent));
        }
        u8::try_from(percent)
            .map(Self)
            .map_err(|_| PricingError::InvalidDiscount(percent))
    }

    /// Create a discount from a raw catalog value, rounding half away from
    /// zero. An absent value means no discount.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDiscount`] if the rounded value is out
    /// of range.
    pub fn from_raw(raw: Option<Decimal>) -> Result<Self, PricingError> {
        Self::new(round_discount(raw))
    }

    /// The whole percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this is the zero discount.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The discount as a fraction of one (`10%` is `0.10`).
    #[must_use]
    pub fn fraction(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Badge text shown next to a discounted price, e.g. `-10%`.
    #[must_use]
    pub fn badge(self) -> Option<String> {
        (!self.is_zero()).then(|| format!("-{}%", self.0))
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for DiscountPercent {
    type Error = PricingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(discount: DiscountPercent) -> Self {
        discount.0
    }
}
