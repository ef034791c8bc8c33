//! Sales Domain
//!
//! This crate implements the transaction pricing and settlement engine: it
//! turns a cart of heterogeneous product lines into a priced, taxed,
//! loyalty-adjusted, payment-settled record, and can later reverse itself
//! via refund.
//!
//! # Settlement Lifecycle
//!
//! ```text
//! Pending -> Completed -> Refunded
//!        \             \-> PartiallyRefunded
//!         \-> Cancelled
//! ```
//!
//! The transaction is the sole orchestrator of cross-entity side effects:
//! stock leaves the catalog and loyalty points move on the customer account
//! only inside [`Transaction::finalize`] and [`Transaction::refund`].
//! Everything before that point is pure bookkeeping on the transaction
//! itself, so an abandoned cart can simply be dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut txn = Transaction::new(Currency::USD, Some(customer_id), "CASHIER-001");
//! txn.add_line(&catalog, product_id, dec!(2), Rate::ZERO, None, today)?;
//! txn.compute_totals(directory.get(customer_id), Rate::new(dec!(0.08)))?;
//! txn.process_payment(PaymentMethod::Cash, Money::new(dec!(25), Currency::USD))?;
//! txn.finalize(&mut catalog, &mut directory)?;
//! ```

pub mod error;
pub mod events;
pub mod line;
pub mod receipt;
pub mod transaction;

pub use error::SaleError;
pub use events::SaleEvent;
pub use line::SaleLine;
pub use receipt::{render_detailed_receipt, render_receipt};
pub use transaction::{
    PaymentMethod, PaymentRecord, Totals, Transaction, TransactionStatus,
};
