//! Vitrine CLI - Price quotes, currency conversion and catalog rendering.
//!
//! # Usage
//!
//! ```bash
//! # Quote a discounted product and recover its original price
//! vitrine quote --price 90 --discount 10
//!
//! # Convert dollars to reais
//! vitrine convert --amount 100 --from USD --to BRL --rate 5
//!
//! # Format an amount for a locale
//! vitrine format --amount 500 --currency BRL --locale pt-BR
//!
//! # Render a saved category listing / product detail
//! vitrine catalog mens-shirts.json --display BRL
//! vitrine product product-84.json
//! ```
//!
//! # Commands
//!
//! - `quote` - Current price, discount badge and original price
//! - `convert` - Convert between USD and BRL
//! - `format` - Render an amount with currency symbol and separators
//! - `catalog` - Render product list cards from catalog JSON
//! - `product` - Render a product detail from catalog JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::catalog::RenderArgs;
use commands::convert::ConvertArgs;
use commands::format::FormatArgs;
use commands::quote::QuoteArgs;
use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront pricing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a product price with its discount
    Quote(QuoteArgs),
    /// Convert an amount between currencies
    Convert(ConvertArgs),
    /// Format an amount for display
    Format(FormatArgs),
    /// Render a product listing from catalog JSON
    Catalog(RenderArgs),
    /// Render a product detail from catalog JSON
    Product(RenderArgs),
}

/// Initialize tracing on stderr so command output on stdout stays clean.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration failed: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Quote(args) => commands::quote::run(&args, config, &mut out)?,
        Commands::Convert(args) => commands::convert::run(&args, config, &mut out)?,
        Commands::Format(args) => commands::format::run(&args, config, &mut out)?,
        Commands::Catalog(args) => commands::catalog::list(&args, config, &mut out)?,
        Commands::Product(args) => commands::catalog::detail(&args, config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "vitrine", "quote", "--price", "90", "--discount", "10.4", "--display", "BRL",
        ])
        .ok();
        assert!(matches!(
            cli.map(|c| c.command),
            Some(Commands::Quote(QuoteArgs { display: Some(vitrine_core::Currency::Brl), .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_currency() {
        let args = ["vitrine", "quote", "--price", "1", "--currency", "EUR"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_format_locale() {
        let cli = Cli::try_parse_from(["vitrine", "format", "--amount", "5", "--locale", "en_us"]);
        assert!(matches!(
            cli.ok().map(|c| c.command),
            Some(Commands::Format(FormatArgs { locale: Some(vitrine_core::Locale::EnUs), .. }))
        ));

        let args = ["vitrine", "format", "--amount", "5", "--locale", "ja-JP"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
