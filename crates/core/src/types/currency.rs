//! Supported currencies.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::types::Locale;

/// ISO 4217 currency codes the storefront can price in.
///
/// Catalog prices arrive in [`Currency::BASE`]; every other currency is
/// reached through an [`ExchangeRate`](crate::ExchangeRate) quoted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Brazilian real.
    Brl,
}

impl Currency {
    /// Currency catalog prices are denominated in.
    pub const BASE: Self = Self::Usd;

    /// Every supported currency.
    pub const ALL: [Self; 2] = [Self::Usd, Self::Brl];

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Brl => "BRL",
        }
    }

    /// Symbol used when rendering amounts for `locale`.
    ///
    /// Dollar amounts get the `US$` prefix in Brazilian Portuguese so they
    /// are not mistaken for reais.
    #[must_use]
    pub const fn symbol(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Usd, Locale::EnUs) => "$",
            (Self::Usd, Locale::PtBr) => "US$",
            (Self::Brl, _) => "R$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| PricingError::UnsupportedCurrency(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::Brl);
        assert_eq!(" BRL ".parse::<Currency>().unwrap(), Currency::Brl);
    }

    #[test]
    fn test_parse_unsupported() {
        assert_eq!(
            "EUR".parse::<Currency>(),
            Err(PricingError::UnsupportedCurrency("EUR".to_owned()))
        );
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Usd.symbol(Locale::EnUs), "$");
        assert_eq!(Currency::Usd.symbol(Locale::PtBr), "US$");
        assert_eq!(Currency::Brl.symbol(Locale::EnUs), "R$");
        assert_eq!(Currency::Brl.symbol(Locale::PtBr), "R$");
    }

    #[test]
    fn test_serde_uses_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Brl).unwrap(), "\"BRL\"");
        let parsed: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(parsed, Currency::Usd);
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::BASE, Currency::Usd);
    }
}
