//! Price quote command.
//!
//! # Usage
//!
//! ```bash
//! # Quote a $90 product with a 10.4% catalog discount
//! vitrine quote --price 90 --discount 10.4
//!
//! # Same quote displayed in reais
//! vitrine quote --price 90 --discount 10.4 --display BRL --rate 5
//! ```

use std::io::Write;

use clap::Args;
use rust_decimal::Decimal;
use tracing::debug;
use vitrine_core::{Currency, Locale, PriceQuote};

use super::resolve_rate;
use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for `vitrine quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Current (discounted) price
    #[arg(short, long)]
    pub price: Decimal,

    /// Raw discount percentage; rounded to a whole number
    #[arg(short, long)]
    pub discount: Option<Decimal>,

    /// Currency the price is in
    #[arg(short, long, default_value = "USD")]
    pub currency: Currency,

    /// Currency to display the quote in
    #[arg(long)]
    pub display: Option<Currency>,

    /// Reais per US dollar (overrides `VITRINE_USD_BRL_RATE`)
    #[arg(short, long)]
    pub rate: Option<Decimal>,

    /// Display locale (overrides `VITRINE_LOCALE`)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

/// Build a quote and write it to `out`.
///
/// # Errors
///
/// Returns an error for invalid prices or discounts, a missing rate, or a
/// failed write.
pub fn run(args: &QuoteArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let quote = PriceQuote::from_raw(args.price, args.discount, args.currency)?;
    debug!(
        price = %args.price,
        discount = %quote.discount(),
        currency = %args.currency,
        "Built price quote"
    );

    let quote = match args.display {
        Some(target) if target != args.currency => {
            quote.convert_to(target, resolve_rate(args.rate, config)?)?
        }
        _ => quote,
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &quote)?;
        writeln!(out)?;
        return Ok(());
    }

    let locale = args.locale.unwrap_or(config.locale);
    match quote.discount().badge() {
        Some(badge) => writeln!(out, "Price:    {}  {badge}", quote.display_price(locale))?,
        None => writeln!(out, "Price:    {}", quote.display_price(locale))?,
    }
    if let Some(original) = quote.display_original_price(locale) {
        writeln!(out, "Original: {original}")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use vitrine_core::{ExchangeRate, PricingError};

    use super::*;

    fn args(price: Decimal, discount: Option<Decimal>) -> QuoteArgs {
        QuoteArgs {
            price,
            discount,
            currency: Currency::Usd,
            display: None,
            rate: None,
            locale: Some(Locale::EnUs),
            json: false,
        }
    }

    fn render(args: &QuoteArgs, config: &CliConfig) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_discounted_quote() {
        let output = render(&args(dec!(90), Some(dec!(10.4))), &CliConfig::default()).unwrap();
        assert_eq!(output, "Price:    $90.00  -10%\nOriginal: $100.00\n");
    }

    #[test]
    fn test_full_price_quote() {
        let output = render(&args(dec!(19.99), None), &CliConfig::default()).unwrap();
        assert_eq!(output, "Price:    $19.99\n");
    }

    #[test]
    fn test_quote_in_brl() {
        let mut quote_args = args(dec!(90), Some(dec!(10)));
        quote_args.display = Some(Currency::Brl);
        quote_args.locale = Some(Locale::PtBr);
        let config = CliConfig {
            usd_brl_rate: Some(ExchangeRate::new(dec!(5)).unwrap()),
            ..CliConfig::default()
        };
        let output = render(&quote_args, &config).unwrap();
        assert!(output.contains("R$\u{a0}450,00"));
        assert!(output.contains("R$\u{a0}500,00"));
    }

    #[test]
    fn test_brl_price_back_to_usd() {
        let mut quote_args = args(dec!(500), None);
        quote_args.currency = Currency::Brl;
        quote_args.display = Some(Currency::Usd);
        quote_args.rate = Some(dec!(5));
        let output = render(&quote_args, &CliConfig::default()).unwrap();
        assert_eq!(output, "Price:    $100.00\n");
    }

    #[test]
    fn test_quote_in_brl_without_rate() {
        let mut quote_args = args(dec!(90), None);
        quote_args.display = Some(Currency::Brl);
        let result = render(&quote_args, &CliConfig::default());
        assert!(matches!(result, Err(CliError::MissingRate)));
    }

    #[test]
    fn test_full_discount_rejected() {
        let result = render(&args(dec!(90), Some(dec!(100))), &CliConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Pricing(PricingError::InvalidDiscount(100)))
        ));
    }

    #[test]
    fn test_json_output() {
        let mut quote_args = args(dec!(90), Some(dec!(10)));
        quote_args.json = true;
        let output = render(&quote_args, &CliConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["discount"], 10);
        assert_eq!(value["current_price"]["currency"], "USD");
    }
}
