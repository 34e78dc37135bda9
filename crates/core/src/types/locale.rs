//! Display locales.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Locales amounts and labels can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// English (United States).
    #[serde(rename = "en-US")]
    EnUs,
    /// Portuguese (Brazil).
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::EnUs, Self::PtBr];

    /// BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::PtBr => "pt-BR",
        }
    }

    /// Separator between the integer and fractional digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::PtBr => ',',
        }
    }

    /// Separator between groups of three integer digits.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::PtBr => '.',
        }
    }

    /// Text placed between a currency symbol and the digits.
    #[must_use]
    pub const fn symbol_spacing(self) -> &'static str {
        match self {
            Self::EnUs => "",
            Self::PtBr => "\u{a0}",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = PricingError;

    /// Parses a language tag, ignoring case and accepting `_` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| PricingError::UnsupportedLocale(s.to_owned()))
    }
}
