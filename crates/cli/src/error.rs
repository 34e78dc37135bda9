//! CLI error type.

use thiserror::Error;
use vitrine_core::PricingError;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing input was rejected.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// A conversion was requested but no rate is available.
    #[error("No exchange rate available: pass --rate or set VITRINE_USD_BRL_RATE")]
    MissingRate,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog input is not valid JSON for the expected record.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
