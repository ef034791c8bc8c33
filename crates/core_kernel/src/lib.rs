//! Core Kernel - Foundational types and utilities for the retail store system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - A clock abstraction so calendar-dependent pricing stays deterministic under test

pub mod clock;
pub mod identifiers;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::{CustomerId, ProductId, TransactionId};
pub use money::{Currency, Money, MoneyError, Rate};
