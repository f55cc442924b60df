//! Store configuration.
//!
//! Defaults mirror the static configuration block of the demo shop (site
//! name, free-shipping threshold, flat shipping fee, tax rate, contact and
//! social links). A handful of values can be overridden through environment
//! variables, mainly so tests and embedders can relocate the data directory.
//!
//! # Environment Variables (all optional)
//!
//! - `ELITESHOP_DATA_DIR` - Directory for the durable storage backend
//!   (default: `eliteshop-data`)
//! - `ELITESHOP_SHIPPING_THRESHOLD` - Free-shipping threshold in currency
//!   units (default: 50)
//! - `ELITESHOP_SHIPPING_FEE` - Flat shipping fee under the threshold
//!   (default: 9.99)
//! - `ELITESHOP_TAX_RATE` - Tax rate as a fraction (default: 0.08)

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use eliteshop_core::{CurrencyCode, Email, Price};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Display name of the shop.
    pub site_name: String,
    /// Currency every price in the catalog is denominated in.
    pub currency: CurrencyCode,
    /// Orders at or above this subtotal ship free.
    pub shipping_threshold: Price,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: Price,
    /// Tax rate applied to the subtotal (fraction, e.g. 0.08).
    pub tax_rate: Decimal,
    /// Marketing copy for the free-shipping offer.
    pub free_shipping_message: String,
    /// Customer support address.
    pub contact_email: Email,
    /// Social profile URLs shown in the page footer.
    pub social_links: SocialLinks,
    /// Simulated payment processing pause before an order confirms.
    pub payment_processing_delay: Duration,
    /// Directory for the durable storage backend.
    pub data_dir: PathBuf,
}

/// Social profile URLs.
#[derive(Debug, Clone)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            site_name: "EliteShop".to_owned(),
            currency: CurrencyCode::USD,
            shipping_threshold: Price::from_cents(50_00, CurrencyCode::USD),
            shipping_fee: Price::from_cents(9_99, CurrencyCode::USD),
            tax_rate: Decimal::new(8, 2),
            free_shipping_message: "Free shipping on orders over $50".to_owned(),
            contact_email: Email::parse("support@eliteshop.com")
                .expect("default contact email is valid"),
            social_links: SocialLinks {
                facebook: "https://facebook.com/eliteshop".to_owned(),
                twitter: "https://twitter.com/eliteshop".to_owned(),
                instagram: "https://instagram.com/eliteshop".to_owned(),
                linkedin: "https://linkedin.com/company/eliteshop".to_owned(),
            },
            payment_processing_delay: Duration::from_secs(2),
            data_dir: PathBuf::from("eliteshop-data"),
        }
    }
}

impl StoreConfig {
    /// Load configuration, applying environment overrides to the defaults.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override variable is present but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(dir) = get_optional_env("ELITESHOP_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get_optional_env("ELITESHOP_SHIPPING_THRESHOLD") {
            config.shipping_threshold =
                Price::new(parse_decimal("ELITESHOP_SHIPPING_THRESHOLD", &raw)?, config.currency);
        }
        if let Some(raw) = get_optional_env("ELITESHOP_SHIPPING_FEE") {
            config.shipping_fee =
                Price::new(parse_decimal("ELITESHOP_SHIPPING_FEE", &raw)?, config.currency);
        }
        if let Some(raw) = get_optional_env("ELITESHOP_TAX_RATE") {
            config.tax_rate = parse_decimal("ELITESHOP_TAX_RATE", &raw)?;
        }

        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a decimal-valued environment variable.
fn parse_decimal(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    raw.parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}
