//! Subcommand implementations.
//!
//! Every command writes its result to the `out` writer it is given so tests
//! can capture output; diagnostics go through `tracing`.

pub mod catalog;
pub mod convert;
pub mod format;
pub mod quote;

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use vitrine_core::catalog::DisplayOptions;
use vitrine_core::{Currency, ExchangeRate, Locale};

use crate::config::CliConfig;
use crate::error::CliError;

/// Pick the exchange rate: an explicit flag wins over configuration.
fn resolve_rate(flag: Option<Decimal>, config: &CliConfig) -> Result<ExchangeRate, CliError> {
    match flag {
        Some(rate) => Ok(ExchangeRate::new(rate)?),
        None => config.usd_brl_rate.ok_or(CliError::MissingRate),
    }
}

/// Build display options, resolving a rate only when prices must change
/// currency.
fn display_options(
    locale: Option<Locale>,
    display: Option<Currency>,
    rate: Option<Decimal>,
    config: &CliConfig,
) -> Result<DisplayOptions, CliError> {
    let options = DisplayOptions::new(locale.unwrap_or(config.locale));
    match display {
        Some(currency) if currency != Currency::BASE => {
            Ok(options.with_conversion(currency, resolve_rate(rate, config)?))
        }
        _ => Ok(options),
    }
}

/// Read a whole input file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn config_with_rate(rate: Option<Decimal>) -> CliConfig {
        CliConfig {
            usd_brl_rate: rate.map(|r| ExchangeRate::new(r).unwrap()),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_flag_rate_wins() {
        let config = config_with_rate(Some(dec!(5)));
        let rate = resolve_rate(Some(dec!(4.5)), &config).unwrap();
        assert_eq!(rate.value(), dec!(4.5));
    }

    #[test]
    fn test_config_rate_fallback() {
        let config = config_with_rate(Some(dec!(5)));
        assert_eq!(resolve_rate(None, &config).unwrap().value(), dec!(5));
    }

    #[test]
    fn test_missing_rate() {
        let config = config_with_rate(None);
        assert!(matches!(resolve_rate(None, &config), Err(CliError::MissingRate)));
    }

    #[test]
    fn test_display_in_base_currency_needs_no_rate() {
        let config = config_with_rate(None);
        let options = display_options(None, Some(Currency::Usd), None, &config).unwrap();
        assert_eq!(options.conversion, None);
        assert_eq!(options.locale, Locale::PtBr);
    }

    #[test]
    fn test_display_in_brl_uses_rate() {
        let config = config_with_rate(Some(dec!(5)));
        let options =
            display_options(Some(Locale::EnUs), Some(Currency::Brl), None, &config).unwrap();
        assert_eq!(options.conversion.map(|c| c.currency), Some(Currency::Brl));
        assert_eq!(options.locale, Locale::EnUs);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_input(Path::new("/nonexistent/vitrine/catalog.json"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
