//! Customer domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the customer domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Customer already exists: {0}")]
    DuplicateCustomer(String),

    #[error("Insufficient loyalty points: balance {balance}, requested {requested}")]
    InsufficientPoints { balance: Decimal, requested: Decimal },

    #[error("Loyalty point amount must be positive")]
    InvalidPointAmount,
}
