//! Sales domain errors
//!
//! Every rejection leaves the transaction, catalog, and customer state
//! untouched: validation runs before mutation in all settlement paths.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{CustomerId, Money, ProductId};
use domain_catalog::CatalogError;
use domain_customer::CustomerError;

use crate::transaction::TransactionStatus;

/// Errors that can occur in the sales domain
#[derive(Debug, Error, PartialEq)]
pub enum SaleError {
    #[error("Transaction is not pending (status: {status})")]
    NotPending { status: TransactionStatus },

    #[error("Only completed transactions can be refunded (status: {status})")]
    NotRefundable { status: TransactionStatus },

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Product is not for sale: {0}")]
    InactiveProduct(String),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(Decimal),

    #[error("Minimum quantity for {product} is {minimum} {unit}")]
    BelowBulkMinimum {
        product: String,
        minimum: Decimal,
        unit: String,
    },

    #[error("No line at index {0}")]
    LineIndexOutOfRange(usize),

    #[error("No customer attached to this transaction")]
    NoCustomerAttached,

    #[error("Customer does not match the one attached to this transaction")]
    CustomerMismatch,

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Totals have not been computed")]
    TotalsNotComputed,

    #[error("Final total must be positive to take payment")]
    NothingToCharge,

    #[error("Insufficient cash: required {required}, tendered {tendered}")]
    InsufficientCash { required: Money, tendered: Money },

    #[error("Payment has not been processed")]
    PaymentNotProcessed,

    #[error("Refund amount must be positive")]
    InvalidRefundAmount,

    #[error("Refund {requested} exceeds transaction total {total}")]
    RefundExceedsTotal { requested: Money, total: Money },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Customer(#[from] CustomerError),
}
