//! Customer Directory Domain
//!
//! Customers, their tier policies, and the loyalty point ledger.
//!
//! Tier drives two rates: a flat purchase discount and a loyalty accrual
//! multiplier. Tier upgrades are advisory: the directory surfaces
//! eligibility but never changes a tier on its own.

pub mod customer;
pub mod directory;
pub mod error;

pub use customer::{Customer, CustomerTier};
pub use directory::{CustomerDirectory, DirectoryStatistics};
pub use error::CustomerError;
