//! Console interface for the retail store system
//!
//! A menu-driven front end over the domain crates: inventory management,
//! customer management, the sales flow, and reports. All I/O goes through
//! injected `BufRead`/`Write` handles so the whole surface is scriptable in
//! tests.

pub mod app;
pub mod config;
pub mod input;
pub mod reports;
pub mod seed;

pub use app::StoreApp;
pub use config::StoreConfig;
