//! Store configuration

use core_kernel::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Store configuration
///
/// Loaded from `STORE_`-prefixed environment variables; every field falls
/// back to its default when unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name printed on receipts and report headers
    pub store_name: String,
    /// Identifier of the cashier operating this terminal
    pub cashier_id: String,
    /// Sales tax rate as a fraction (0.08 = 8%)
    pub tax_rate: Decimal,
    /// Store currency
    pub currency: Currency,
    /// Log level
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "CONVENIENCE STORE".to_string(),
            cashier_id: "CASHIER-001".to_string(),
            tax_rate: dec!(0.08),
            currency: Currency::USD,
            log_level: "info".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("STORE"))
            .build()?
            .try_deserialize()
    }
}
