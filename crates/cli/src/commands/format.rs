//! Currency formatting command.
//!
//! # Usage
//!
//! ```bash
//! vitrine format --amount 1234.5 --currency BRL --locale pt-BR
//! ```

use std::io::Write;

use clap::Args;
use rust_decimal::Decimal;
use vitrine_core::{Locale, pricing};

use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for `vitrine format`.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Amount to format
    #[arg(short, long)]
    pub amount: Decimal,

    /// Currency code
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Display locale (overrides `VITRINE_LOCALE`)
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

/// Format an amount and write it to `out`.
///
/// # Errors
///
/// Returns an error for unsupported currencies, negative amounts,
/// or a failed write.
pub fn run(args: &FormatArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let locale = args.locale.unwrap_or(config.locale);
    let formatted = pricing::format_currency(args.amount, &args.currency, locale.tag())?;
    writeln!(out, "{formatted}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use vitrine_core::PricingError;

    use super::*;

    fn render(amount: Decimal, currency: &str, locale: Option<Locale>) -> Result<String, CliError> {
        let args = FormatArgs {
            amount,
            currency: currency.to_owned(),
            locale,
        };
        let mut out = Vec::new();
        run(&args, &CliConfig::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_locale_is_config() {
        assert_eq!(render(dec!(500), "BRL", None).unwrap(), "R$\u{a0}500,00\n");
    }

    #[test]
    fn test_explicit_locale() {
        assert_eq!(
            render(dec!(1234.5), "USD", Some(Locale::EnUs)).unwrap(),
            "$1,234.50\n"
        );
    }

    #[test]
    fn test_unsupported_currency() {
        assert!(matches!(
            render(dec!(1), "JPY", Some(Locale::EnUs)),
            Err(CliError::Pricing(PricingError::UnsupportedCurrency(_)))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            render(dec!(-5), "USD", Some(Locale::EnUs)),
            Err(CliError::Pricing(PricingError::NegativeAmount(_)))
        ));
    }
}
