//! Pre-built test fixtures
//!
//! Consistent, predictable values shared across the suite. Every date-aware
//! test pins the calendar to [`DateFixtures::today`] instead of the wall
//! clock.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The store currency used throughout the suite
    pub fn currency() -> Currency {
        Currency::USD
    }

    /// Creates a USD amount
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// A standard $100 amount
    pub fn usd_100() -> Money {
        Self::usd(dec!(100.00))
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// The pinned "today" for deterministic perishable pricing
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 14).expect("valid fixture date")
    }

    /// A date `days` after the pinned today
    pub fn days_from_today(days: i64) -> NaiveDate {
        Self::today() + chrono::Duration::days(days)
    }
}
