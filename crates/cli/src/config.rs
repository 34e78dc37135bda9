//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_USD_BRL_RATE` - Reais per US dollar, used when converting
//!   without an explicit `--rate`
//! - `VITRINE_LOCALE` - Display locale (default: pt-BR)
//! - `VITRINE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Tracing filter (default: info)

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use vitrine_core::{ExchangeRate, Locale};

const RATE_VAR: &str = "VITRINE_USD_BRL_RATE";
const LOCALE_VAR: &str = "VITRINE_LOCALE";
const LOG_FORMAT_VAR: &str = "VITRINE_LOG_FORMAT";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Exchange rate from USD to BRL, if configured
    pub usd_brl_rate: Option<ExchangeRate>,
    /// Default display locale
    pub locale: Locale,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let usd_brl_rate = lookup(RATE_VAR)
            .map(|raw| parse_rate(&raw))
            .transpose()?;
        let locale = parse_optional(&lookup, LOCALE_VAR)?.unwrap_or_default();
        let log_format = parse_optional(&lookup, LOG_FORMAT_VAR)?.unwrap_or_default();

        Ok(Self {
            usd_brl_rate,
            locale,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a strictly positive exchange rate.
fn parse_rate(raw: &str) -> Result<ExchangeRate, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar(RATE_VAR.to_string(), reason);
    let value = Decimal::from_str(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    ExchangeRate::new(value).map_err(|e| invalid(e.to_string()))
}

/// Parse an optional variable with its `FromStr` implementation.
fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}
