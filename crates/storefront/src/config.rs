//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `RESTAURANTLY_CURRENCY` - Currency code shown before amounts (default: IDR)
//! - `RESTAURANTLY_THOUSANDS_SEPARATOR` - Single digit-grouping character
//!   (default: none, amounts render as `IDR 60000`)
//! - `RESTAURANTLY_EMPTY_CART_NOTICE` - Notice shown when checking out an empty cart
//! - `RESTAURANTLY_ORDER_CONFIRMED_NOTICE` - Notice shown when an order is confirmed
//! - `RESTAURANTLY_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter directives (default: info)

use restaurantly_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_EMPTY_CART_NOTICE: &str = "Keranjang belanja kosong!";
const DEFAULT_ORDER_CONFIRMED_NOTICE: &str = "Pesanan berhasil! Terima kasih telah berbelanja.";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorefrontConfig {
    /// How prices are labelled and grouped
    pub pricing: PricingConfig,
    /// User-facing notice texts
    pub notices: NoticeConfig,
    /// Log output format
    pub log_format: LogFormat,
}

/// Price display configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingConfig {
    /// Currency code printed in front of every amount
    pub currency: CurrencyCode,
    /// Digit-grouping character for the integer part, if any
    pub thousands_separator: Option<char>,
}

/// Texts of the notices the cart raises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeConfig {
    /// Shown when checkout is requested with nothing in the cart
    pub empty_cart: String,
    /// Shown when an order is confirmed
    pub order_confirmed: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            empty_cart: DEFAULT_EMPTY_CART_NOTICE.to_string(),
            order_confirmed: DEFAULT_ORDER_CONFIRMED_NOTICE.to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, for terminals
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `pretty` or `json`, got `{s}`")),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            pricing: PricingConfig::from_env()?,
            notices: NoticeConfig::from_env(),
            log_format: get_env_or_default("RESTAURANTLY_LOG_FORMAT", "pretty")
                .parse()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("RESTAURANTLY_LOG_FORMAT".to_string(), e)
                })?,
        })
    }
}

impl PricingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let currency = get_env_or_default("RESTAURANTLY_CURRENCY", "IDR")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("RESTAURANTLY_CURRENCY".to_string(), e))?;
        let thousands_separator = get_optional_env("RESTAURANTLY_THOUSANDS_SEPARATOR")
            .map(|value| parse_separator(&value))
            .transpose()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RESTAURANTLY_THOUSANDS_SEPARATOR".to_string(), e)
            })?;

        Ok(Self {
            currency,
            thousands_separator,
        })
    }
}

impl NoticeConfig {
    fn from_env() -> Self {
        Self {
            empty_cart: get_env_or_default(
                "RESTAURANTLY_EMPTY_CART_NOTICE",
                DEFAULT_EMPTY_CART_NOTICE,
            ),
            order_confirmed: get_env_or_default(
                "RESTAURANTLY_ORDER_CONFIRMED_NOTICE",
                DEFAULT_ORDER_CONFIRMED_NOTICE,
            ),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a digit-grouping separator. Exactly one non-digit character.
fn parse_separator(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_ascii_digit() => Ok(c),
        (Some(c), None) => Err(format!("separator cannot be a digit (got `{c}`)")),
        _ => Err(format!(
            "must be exactly one character (got {} characters)",
            value.chars().count()
        )),
    }
}
