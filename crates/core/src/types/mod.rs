//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for the values the pricing
//! calculator works on.

pub mod currency;
pub mod discount;
pub mod id;
pub mod locale;
pub mod money;
pub mod rate;

pub use currency::Currency;
pub use discount::DiscountPercent;
pub use id::*;
pub use locale::Locale;
pub use money::Money;
pub use rate::ExchangeRate;
