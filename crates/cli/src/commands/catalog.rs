//! Catalog rendering commands.
//!
//! Render saved catalog API responses the way the product list and product
//! detail screens show them.
//!
//! # Usage
//!
//! ```bash
//! # Product list from a saved /products/category/{slug} response
//! vitrine catalog mens-shirts.json
//!
//! # Product detail from stdin, prices in reais
//! curl -s https://dummyjson.com/products/84 | vitrine product - --display BRL
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;
use tracing::{info, warn};
use vitrine_core::catalog::{self, Product, ProductCard, ProductDetail, ProductPage};
use vitrine_core::{Currency, Locale};

use super::{display_options, read_input};
use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments shared by `vitrine catalog` and `vitrine product`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file to read, or `-` for stdin
    pub input: PathBuf,

    /// Currency to display prices in
    #[arg(long)]
    pub display: Option<Currency>,

    /// Reais per US dollar (overrides `VITRINE_USD_BRL_RATE`)
    #[arg(short, long)]
    pub rate: Option<Decimal>,

    /// Display locale (overrides `VITRINE_LOCALE`)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Print the rendered values as JSON
    #[arg(long)]
    pub json: bool,
}

/// Render a product listing.
///
/// Records with invalid prices are skipped with a warning so one bad entry
/// does not hide the rest of the page.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, a required rate
/// is missing, or writing fails.
pub fn list(args: &RenderArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let options = display_options(args.locale, args.display, args.rate, config)?;
    let page: ProductPage = serde_json::from_str(&read_input(&args.input)?)?;
    info!(
        products = page.products.len(),
        total = page.total,
        "Loaded product page"
    );

    let cards: Vec<ProductCard> = page
        .products
        .iter()
        .filter_map(|product| match ProductCard::build(product, &options) {
            Ok(card) => Some(card),
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "Skipping product with invalid price");
                None
            }
        })
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &cards)?;
        writeln!(out)?;
        return Ok(());
    }

    if cards.is_empty() {
        writeln!(out, "{}", catalog::empty_listing_label(options.locale))?;
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{card}")?;
    }
    Ok(())
}

/// Render a single product detail.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the record has an
/// invalid price, a required rate is missing, or writing fails.
pub fn detail(args: &RenderArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let options = display_options(args.locale, args.display, args.rate, config)?;
    let product: Product = serde_json::from_str(&read_input(&args.input)?)?;
    info!(product_id = %product.id, "Loaded product");

    let detail = ProductDetail::build(&product, &options)?;
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &detail)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{detail}")?;
    }
    Ok(())
}
