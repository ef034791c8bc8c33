//! Domain events for the transaction aggregate
//!
//! Events capture the settlement milestones for audit trails and for the
//! report layer; the aggregate accumulates them and the caller drains them
//! with [`Transaction::take_events`](crate::Transaction::take_events).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, TransactionId};

use crate::transaction::PaymentMethod;

/// Domain events emitted by the Transaction aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SaleEvent {
    /// A new cart was opened
    TransactionOpened {
        transaction_id: TransactionId,
        customer_id: Option<CustomerId>,
        timestamp: DateTime<Utc>,
    },

    /// Payment was validated and recorded
    PaymentAccepted {
        transaction_id: TransactionId,
        method: PaymentMethod,
        amount: Money,
        timestamp: DateTime<Utc>,
    },

    /// Side effects committed; transaction closed as completed
    TransactionCompleted {
        transaction_id: TransactionId,
        final_total: Money,
        points_earned: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A completed transaction was reversed
    TransactionRefunded {
        transaction_id: TransactionId,
        amount: Money,
        full: bool,
        timestamp: DateTime<Utc>,
    },

    /// A pending cart was abandoned
    TransactionCancelled {
        transaction_id: TransactionId,
        timestamp: DateTime<Utc>,
    },
}

impl SaleEvent {
    /// Returns the transaction ID associated with this event
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            SaleEvent::TransactionOpened { transaction_id, .. } => *transaction_id,
            SaleEvent::PaymentAccepted { transaction_id, .. } => *transaction_id,
            SaleEvent::TransactionCompleted { transaction_id, .. } => *transaction_id,
            SaleEvent::TransactionRefunded { transaction_id, .. } => *transaction_id,
            SaleEvent::TransactionCancelled { transaction_id, .. } => *transaction_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            SaleEvent::TransactionOpened { timestamp, .. } => *timestamp,
            SaleEvent::PaymentAccepted { timestamp, .. } => *timestamp,
            SaleEvent::TransactionCompleted { timestamp, .. } => *timestamp,
            SaleEvent::TransactionRefunded { timestamp, .. } => *timestamp,
            SaleEvent::TransactionCancelled { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            SaleEvent::TransactionOpened { .. } => "TransactionOpened",
            SaleEvent::PaymentAccepted { .. } => "PaymentAccepted",
            SaleEvent::TransactionCompleted { .. } => "TransactionCompleted",
            SaleEvent::TransactionRefunded { .. } => "TransactionRefunded",
            SaleEvent::TransactionCancelled { .. } => "TransactionCancelled",
        }
    }
}
