//! Currency conversion command.
//!
//! # Usage
//!
//! ```bash
//! vitrine convert --amount 100 --from USD --to BRL --rate 5
//! VITRINE_USD_BRL_RATE=5 vitrine convert --amount 500 --from BRL --to USD
//! ```

use std::io::Write;

use clap::Args;
use rust_decimal::Decimal;
use tracing::info;
use vitrine_core::{Locale, pricing};

use super::resolve_rate;
use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for `vitrine convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(short, long)]
    pub amount: Decimal,

    /// Source currency code
    #[arg(short, long, default_value = "USD")]
    pub from: String,

    /// Target currency code
    #[arg(short, long, default_value = "BRL")]
    pub to: String,

    /// Reais per US dollar (overrides `VITRINE_USD_BRL_RATE`)
    #[arg(short, long)]
    pub rate: Option<Decimal>,

    /// Display locale (overrides `VITRINE_LOCALE`)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Print the unrounded amount instead of a formatted price
    #[arg(long)]
    pub raw: bool,
}

/// Convert an amount and write it to `out`.
///
/// # Errors
///
/// Returns an error for unsupported currencies, negative amounts, a missing
/// or non-positive rate, or a failed write.
pub fn run(args: &ConvertArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let rate = resolve_rate(args.rate, config)?;
    let converted = pricing::convert(args.amount, &args.from, &args.to, rate.value())?;
    info!(
        amount = %args.amount,
        from = %args.from,
        to = %args.to,
        rate = %rate,
        converted = %converted,
        "Converted amount"
    );

    if args.raw {
        writeln!(out, "{}", converted.normalize())?;
    } else {
        let locale = args.locale.unwrap_or(config.locale);
        writeln!(out, "{}", pricing::format_currency(converted, &args.to, locale.tag())?)?;
    }
    Ok(())
}
