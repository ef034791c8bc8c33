//! Shared test utilities for the retail store test suite
//!
//! Builders construct entities with sensible defaults so tests only spell
//! out the fields they actually care about; fixtures pin the money amounts
//! and calendar dates the suite reasons against.

pub mod builders;
pub mod fixtures;

pub use builders::{TestCustomerBuilder, TestProductBuilder};
pub use fixtures::{DateFixtures, MoneyFixtures};
