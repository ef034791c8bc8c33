//! Retail store POS - console binary
//!
//! Starts the menu-driven point-of-sale terminal with the demo inventory
//! loaded.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pos
//! ```
//!
//! # Environment Variables
//!
//! * `STORE_STORE_NAME` - name printed on receipts (default: CONVENIENCE STORE)
//! * `STORE_CASHIER_ID` - cashier identifier (default: CASHIER-001)
//! * `STORE_TAX_RATE` - sales tax fraction (default: 0.08)
//! * `STORE_CURRENCY` - ISO currency code (default: USD)
//! * `STORE_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use std::io::{stdin, stdout};

use interface_cli::{StoreApp, StoreConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = StoreConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    tracing::info!(
        store = %config.store_name,
        cashier = %config.cashier_id,
        tax_rate = %config.tax_rate,
        "starting POS terminal"
    );

    let mut app = StoreApp::new(config);
    app.seed_demo_data();

    let mut input = stdin().lock();
    let mut output = stdout();
    app.run(&mut input, &mut output)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
