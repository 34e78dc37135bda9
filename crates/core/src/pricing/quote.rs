//! Derived price quote for a displayed product.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PricingError;
use crate::pricing::{convert_amount, original_amount};
use crate::types::{Currency, DiscountPercent, ExchangeRate, Locale, Money};

/// Current price, discount and the original price derived from them.
///
/// A quote is built fresh every time a product is displayed and is never
/// mutated. The original price has no setter: it is always recomputed from
/// the current price and discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    current_price: Money,
    discount: DiscountPercent,
    original_price: Money,
}

impl PriceQuote {
    /// Build a quote from a current price and discount.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the original price does not fit.
    pub fn new(current_price: Money, discount: DiscountPercent) -> Result<Self, PricingError> {
        let original = original_amount(current_price.amount(), discount)?;
        Ok(Self {
            current_price,
            discount,
            original_price: Money::new(original, current_price.currency())?,
        })
    }

    /// Build a quote from raw catalog fields.
    ///
    /// `raw_discount` is rounded half away from zero; `None` means no discount.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NegativeAmount`] if `price` is negative.
    /// - [`PricingError::InvalidDiscount`] if the rounded discount is out of range.
    pub fn from_raw(
        price: Decimal,
        raw_discount: Option<Decimal>,
        currency: Currency,
    ) -> Result<Self, PricingError> {
        Self::new(
            Money::new(price, currency)?,
            DiscountPercent::from_raw(raw_discount)?,
        )
    }

    /// The price the product sells for now.
    #[must_use]
    pub const fn current_price(&self) -> Money {
        self.current_price
    }

    /// The discount applied to the original price.
    #[must_use]
    pub const fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// The price before the discount.
    #[must_use]
    pub const fn original_price(&self) -> Money {
        self.original_price
    }

    /// Currency of both prices.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.current_price.currency()
    }

    /// Whether a discount applies.
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }

    /// Re-quote in another currency.
    ///
    /// The current price is converted and the original price re-derived, so
    /// the discount carries over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if a converted amount does not fit.
    pub fn convert_to(&self, currency: Currency, rate: ExchangeRate) -> Result<Self, PricingError> {
        if currency == self.currency() {
            return Ok(*self);
        }
        let amount = convert_amount(self.current_price.amount(), self.currency(), currency, rate)?;
        Self::new(Money::new(amount, currency)?, self.discount)
    }

    /// Formatted current price.
    #[must_use]
    pub fn display_price(&self, locale: Locale) -> String {
        self.current_price.format(locale)
    }

    /// Formatted original price, only when a discount applies.
    #[must_use]
    pub fn display_original_price(&self, locale: Locale) -> Option<String> {
        self.has_discount()
            .then(|| self.original_price.format(locale))
    }
}
