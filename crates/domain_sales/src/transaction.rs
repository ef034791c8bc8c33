//! Transaction aggregate
//!
//! The Transaction is the consistency boundary for settlement. It owns its
//! lines outright and references catalog products and customer accounts by
//! identifier only; the arenas are borrowed in for the two operations that
//! commit cross-entity side effects, `finalize` and `refund`.
//!
//! # Invariants
//!
//! - Stock and loyalty balances move only in `finalize` and `refund`
//! - Totals are recomputed from scratch and invalidated by every cart
//!   mutation, so stale totals can never be settled
//! - A completed transaction is immutable except for the refund transition

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, CustomerId, Money, ProductId, Rate, TransactionId};
use domain_catalog::Catalog;
use domain_customer::{Customer, CustomerDirectory, CustomerError};

use crate::error::SaleError;
use crate::events::SaleEvent;
use crate::line::SaleLine;

/// How a transaction was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    MobilePayment,
    LoyaltyPoints,
    GiftCard,
}

impl PaymentMethod {
    /// All methods, in menu order
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::MobilePayment,
        PaymentMethod::LoyaltyPoints,
        PaymentMethod::GiftCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::MobilePayment => "Mobile Payment",
            PaymentMethod::LoyaltyPoints => "Loyalty Points",
            PaymentMethod::GiftCard => "Gift Card",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settlement lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Cart is open; nothing has been committed
    Pending,
    /// Side effects committed; the historical record
    Completed,
    /// Abandoned before settlement; terminal
    Cancelled,
    /// Fully reversed; terminal
    Refunded,
    /// Partially reversed; terminal
    PartiallyRefunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Cancelled => "Cancelled",
            TransactionStatus::Refunded => "Refunded",
            TransactionStatus::PartiallyRefunded => "Partially Refunded",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computed settlement figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Post-discount, pre-tax amount
    pub subtotal: Money,
    /// Tax on the subtotal
    pub tax: Money,
    /// Everything given away: line discounts, tier discount, points applied
    pub total_discount: Money,
    /// Amount due
    pub final_total: Money,
}

/// Accepted payment details
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub method: PaymentMethod,
    pub amount_paid: Money,
    /// Change due back; non-zero only for cash
    pub change: Money,
}

/// A sales transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    currency: Currency,
    customer_id: Option<CustomerId>,
    cashier_id: String,
    lines: Vec<SaleLine>,
    totals: Option<Totals>,
    points_used: Decimal,
    points_earned: Decimal,
    payment: Option<PaymentRecord>,
    status: TransactionStatus,
    opened_at: DateTime<Utc>,
    note: Option<String>,
    #[serde(skip)]
    events: Vec<SaleEvent>,
}

impl Transaction {
    /// Opens a new pending transaction
    pub fn new(
        currency: Currency,
        customer_id: Option<CustomerId>,
        cashier_id: impl Into<String>,
    ) -> Self {
        let id = TransactionId::new_v7();
        let now = Utc::now();
        Self {
            id,
            currency,
            customer_id,
            cashier_id: cashier_id.into(),
            lines: Vec::new(),
            totals: None,
            points_used: Decimal::ZERO,
            points_earned: Decimal::ZERO,
            payment: None,
            status: TransactionStatus::Pending,
            opened_at: now,
            note: None,
            events: vec![SaleEvent::TransactionOpened {
                transaction_id: id,
                customer_id,
                timestamp: now,
            }],
        }
    }

    // Accessors

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn cashier_id(&self) -> &str {
        &self.cashier_id
    }

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn totals(&self) -> Option<&Totals> {
        self.totals.as_ref()
    }

    pub fn points_used(&self) -> Decimal {
        self.points_used
    }

    pub fn points_earned(&self) -> Decimal {
        self.points_earned
    }

    pub fn payment(&self) -> Option<&PaymentRecord> {
        self.payment.as_ref()
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<SaleEvent> {
        std::mem::take(&mut self.events)
    }

    // Cart management

    /// Adds a priced line for a catalog product
    ///
    /// Stock is checked against the current catalog count but not reserved;
    /// the decrement happens at [`finalize`](Self::finalize). Any computed
    /// totals are invalidated.
    pub fn add_line(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: Decimal,
        discount: Rate,
        note: Option<String>,
        today: NaiveDate,
    ) -> Result<(), SaleError> {
        self.ensure_pending()?;
        let product = catalog
            .get(product_id)
            .ok_or(SaleError::ProductNotFound(product_id))?;
        let line = SaleLine::new(product, quantity, discount, note, today)?;
        self.lines.push(line);
        self.totals = None;
        Ok(())
    }

    /// Removes a line by index, returning it
    pub fn remove_line(&mut self, index: usize) -> Result<SaleLine, SaleError> {
        self.ensure_pending()?;
        if index >= self.lines.len() {
            return Err(SaleError::LineIndexOutOfRange(index));
        }
        self.totals = None;
        Ok(self.lines.remove(index))
    }

    /// Empties the cart
    pub fn clear_lines(&mut self) -> Result<(), SaleError> {
        self.ensure_pending()?;
        self.lines.clear();
        self.totals = None;
        Ok(())
    }

    // Settlement

    /// Reserves loyalty points to spend 1:1 against the subtotal
    ///
    /// Points are checked against the customer's balance now and redeemed at
    /// [`finalize`](Self::finalize). Invalidates any computed totals, so the
    /// original engine's call-order hazard (points applied after totals were
    /// computed silently doing nothing) cannot occur: payment will refuse to
    /// proceed until totals are recomputed.
    pub fn apply_loyalty_points(
        &mut self,
        customer: &Customer,
        points: Decimal,
    ) -> Result<(), SaleError> {
        self.ensure_pending()?;
        self.ensure_customer(customer.id())?;
        if points <= Decimal::ZERO {
            return Err(CustomerError::InvalidPointAmount.into());
        }
        if customer.loyalty_points() < points {
            return Err(CustomerError::InsufficientPoints {
                balance: customer.loyalty_points(),
                requested: points,
            }
            .into());
        }
        self.points_used = points;
        self.totals = None;
        Ok(())
    }

    /// Computes subtotal, discounts, tax, and the amount due
    ///
    /// Idempotent: recomputed from scratch on every call, so it can be
    /// re-run after any cart change. Line discounts apply first, then the
    /// customer tier discount on the running subtotal, then reserved loyalty
    /// points as 1:1 currency; tax applies to what remains.
    ///
    /// `customer` must be the account attached at open time (or `None` for
    /// an anonymous sale).
    pub fn compute_totals(
        &mut self,
        customer: Option<&Customer>,
        tax_rate: Rate,
    ) -> Result<Totals, SaleError> {
        self.ensure_pending()?;
        match (self.customer_id, customer) {
            (None, None) => {}
            (Some(expected), Some(c)) if c.id() == expected => {}
            (Some(_), None) => return Err(SaleError::NoCustomerAttached),
            _ => return Err(SaleError::CustomerMismatch),
        }

        let zero = Money::zero(self.currency);
        let mut subtotal = self.lines.iter().fold(zero, |acc, l| acc + l.subtotal());
        let mut total_discount = self
            .lines
            .iter()
            .fold(zero, |acc, l| acc + l.discount_amount());

        if let Some(customer) = customer {
            let tier_discount = customer.tier().discount_rate().apply(&subtotal);
            total_discount = total_discount + tier_discount;
            subtotal = subtotal - tier_discount;
        }

        if self.points_used > Decimal::ZERO {
            let points_value = Money::new(self.points_used, self.currency);
            subtotal = subtotal - points_value;
            total_discount = total_discount + points_value;
        }

        let tax = tax_rate.apply(&subtotal);
        let final_total = subtotal + tax;

        self.points_earned = match customer {
            Some(customer) => {
                final_total.amount() * dec!(0.01) * customer.tier().points_multiplier()
            }
            None => Decimal::ZERO,
        };

        let totals = Totals {
            subtotal,
            tax,
            total_discount,
            final_total,
        };
        self.totals = Some(totals);
        Ok(totals)
    }

    /// Validates and records payment; the status does not change yet
    ///
    /// Cash must cover the final total and earns change; all other methods
    /// are taken at face value for exactly the amount due.
    pub fn process_payment(
        &mut self,
        method: PaymentMethod,
        amount_paid: Money,
    ) -> Result<(), SaleError> {
        self.ensure_pending()?;
        let totals = self.totals.ok_or(SaleError::TotalsNotComputed)?;
        if !totals.final_total.is_positive() {
            return Err(SaleError::NothingToCharge);
        }

        let record = match method {
            PaymentMethod::Cash => {
                if amount_paid.amount() < totals.final_total.amount() {
                    return Err(SaleError::InsufficientCash {
                        required: totals.final_total,
                        tendered: amount_paid,
                    });
                }
                PaymentRecord {
                    method,
                    amount_paid,
                    change: amount_paid - totals.final_total,
                }
            }
            _ => PaymentRecord {
                method,
                amount_paid: totals.final_total,
                change: Money::zero(self.currency),
            },
        };

        self.payment = Some(record);
        self.events.push(SaleEvent::PaymentAccepted {
            transaction_id: self.id,
            method,
            amount: record.amount_paid,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Commits the transaction: the single point where stock leaves the
    /// catalog and the customer account is touched
    ///
    /// Per line, stock drops by `ceil(quantity)`. An attached customer has
    /// the purchase recorded against cumulative spend (which itself accrues
    /// points), reserved points redeemed, and the precomputed earned points
    /// granted.
    ///
    /// # Errors
    ///
    /// Fails before mutating anything if the transaction is not pending, the
    /// payment is missing, any product has disappeared or lost stock since
    /// the line was added, or the customer's point balance no longer covers
    /// the reserved points.
    pub fn finalize(
        &mut self,
        catalog: &mut Catalog,
        directory: &mut CustomerDirectory,
    ) -> Result<(), SaleError> {
        self.ensure_pending()?;
        let payment = self.payment.ok_or(SaleError::PaymentNotProcessed)?;
        let totals = self.totals.ok_or(SaleError::TotalsNotComputed)?;

        // Verify everything before the first mutation so a failure here
        // leaves no partial effect.
        for line in &self.lines {
            let product = catalog
                .get(line.product_id())
                .ok_or(SaleError::ProductNotFound(line.product_id()))?;
            if product.current_stock() < line.units() {
                return Err(domain_catalog::CatalogError::InsufficientStock {
                    product: product.name().to_string(),
                    available: product.current_stock(),
                    requested: line.units(),
                }
                .into());
            }
        }
        if let Some(customer_id) = self.customer_id {
            let customer = directory
                .get(customer_id)
                .ok_or(SaleError::CustomerNotFound(customer_id))?;
            if self.points_used > Decimal::ZERO && customer.loyalty_points() < self.points_used {
                return Err(CustomerError::InsufficientPoints {
                    balance: customer.loyalty_points(),
                    requested: self.points_used,
                }
                .into());
            }
        }

        for line in &self.lines {
            if let Some(product) = catalog.get_mut(line.product_id()) {
                // Stock availability was checked above
                product.reduce_stock(line.units())?;
            }
        }

        if let Some(customer_id) = self.customer_id {
            if let Some(customer) = directory.get_mut(customer_id) {
                customer.record_purchase(totals.final_total);
                if self.points_used > Decimal::ZERO {
                    customer.redeem_points(self.points_used)?;
                }
                if self.points_earned > Decimal::ZERO {
                    customer.award_points(self.points_earned);
                }
            }
        }

        self.status = TransactionStatus::Completed;
        self.events.push(SaleEvent::TransactionCompleted {
            transaction_id: self.id,
            final_total: totals.final_total,
            points_earned: self.points_earned,
            timestamp: Utc::now(),
        });
        tracing::info!(
            transaction = %self.id,
            total = %totals.final_total,
            method = %payment.method,
            "transaction completed"
        );
        Ok(())
    }

    /// Reverses a completed transaction, fully or partially
    ///
    /// `amount = None` refunds the full final total. Stock restoration and
    /// loyalty reversal scale with the refunded fraction: a half refund puts
    /// back half of each line's units (rounded down) and claws back half the
    /// earned points. A full refund therefore restores everything exactly.
    ///
    /// Both resulting states are terminal; a second refund is rejected.
    pub fn refund(
        &mut self,
        catalog: &mut Catalog,
        directory: &mut CustomerDirectory,
        amount: Option<Money>,
    ) -> Result<Money, SaleError> {
        if self.status != TransactionStatus::Completed {
            return Err(SaleError::NotRefundable {
                status: self.status,
            });
        }
        let totals = self.totals.ok_or(SaleError::TotalsNotComputed)?;
        let amount = amount.unwrap_or(totals.final_total);
        if !amount.is_positive() {
            return Err(SaleError::InvalidRefundAmount);
        }
        if amount.amount() > totals.final_total.amount() {
            return Err(SaleError::RefundExceedsTotal {
                requested: amount,
                total: totals.final_total,
            });
        }

        if let Some(customer_id) = self.customer_id {
            if directory.get(customer_id).is_none() {
                return Err(SaleError::CustomerNotFound(customer_id));
            }
        }

        let fraction = amount.amount() / totals.final_total.amount();

        for line in &self.lines {
            let restock = (Decimal::from(line.units()) * fraction)
                .floor()
                .to_u32()
                .unwrap_or(0);
            match catalog.get_mut(line.product_id()) {
                Some(product) => product.add_stock(restock),
                None => tracing::warn!(
                    product = line.product_name(),
                    "product no longer in catalog; skipping restock"
                ),
            }
        }

        if let Some(customer_id) = self.customer_id {
            if let Some(customer) = directory.get_mut(customer_id) {
                customer.record_purchase(-amount);
                if self.points_earned > Decimal::ZERO {
                    customer.forfeit_points(self.points_earned * fraction);
                }
            }
        }

        let full = amount.amount() >= totals.final_total.amount();
        self.status = if full {
            TransactionStatus::Refunded
        } else {
            TransactionStatus::PartiallyRefunded
        };
        self.events.push(SaleEvent::TransactionRefunded {
            transaction_id: self.id,
            amount,
            full,
            timestamp: Utc::now(),
        });
        tracing::info!(transaction = %self.id, amount = %amount, full, "transaction refunded");
        Ok(amount)
    }

    /// Abandons a pending transaction; commits nothing
    pub fn cancel(&mut self) -> Result<(), SaleError> {
        self.ensure_pending()?;
        self.status = TransactionStatus::Cancelled;
        self.events.push(SaleEvent::TransactionCancelled {
            transaction_id: self.id,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), SaleError> {
        if self.status != TransactionStatus::Pending {
            return Err(SaleError::NotPending {
                status: self.status,
            });
        }
        Ok(())
    }

    fn ensure_customer(&self, id: CustomerId) -> Result<(), SaleError> {
        match self.customer_id {
            Some(expected) if expected == id => Ok(()),
            Some(_) => Err(SaleError::CustomerMismatch),
            None => Err(SaleError::NoCustomerAttached),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Rate;
    use domain_catalog::{Product, ProductCategory};
    use domain_customer::CustomerTier;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
    }

    fn ten_dollar_widget(stock: u32) -> Product {
        // cost 8.00, markup 25% -> sells at exactly 10.00
        Product::standard(
            "Widget",
            usd(dec!(10.00)),
            usd(dec!(8.00)),
            stock,
            ProductCategory::Household,
            Rate::new(dec!(0.25)),
        )
    }

    #[test]
    fn test_totals_without_customer() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(ten_dollar_widget(50)).unwrap();

        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.add_line(&catalog, id, dec!(2), Rate::ZERO, None, today())
            .unwrap();
        let totals = txn.compute_totals(None, Rate::new(dec!(0.08))).unwrap();

        assert_eq!(totals.subtotal.amount(), dec!(20.00));
        assert_eq!(totals.tax.amount(), dec!(1.60));
        assert_eq!(totals.final_total.amount(), dec!(21.60));
        assert_eq!(totals.total_discount.amount(), dec!(0));
    }

    #[test]
    fn test_totals_are_idempotent() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(ten_dollar_widget(50)).unwrap();

        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.add_line(&catalog, id, dec!(2), Rate::ZERO, None, today())
            .unwrap();
        let first = txn.compute_totals(None, Rate::new(dec!(0.08))).unwrap();
        let second = txn.compute_totals(None, Rate::new(dec!(0.08))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cart_mutation_invalidates_totals() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(ten_dollar_widget(50)).unwrap();

        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.add_line(&catalog, id, dec!(2), Rate::ZERO, None, today())
            .unwrap();
        txn.compute_totals(None, Rate::new(dec!(0.08))).unwrap();
        assert!(txn.totals().is_some());

        txn.add_line(&catalog, id, dec!(1), Rate::ZERO, None, today())
            .unwrap();
        assert!(txn.totals().is_none());
        assert_eq!(
            txn.process_payment(PaymentMethod::Cash, usd(dec!(100))),
            Err(SaleError::TotalsNotComputed)
        );
    }

    #[test]
    fn test_payment_requires_totals() {
        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        assert_eq!(
            txn.process_payment(PaymentMethod::CreditCard, usd(dec!(10))),
            Err(SaleError::TotalsNotComputed)
        );
    }

    #[test]
    fn test_cancel_only_from_pending() {
        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.cancel().unwrap();
        assert_eq!(txn.status(), TransactionStatus::Cancelled);
        assert!(matches!(txn.cancel(), Err(SaleError::NotPending { .. })));
    }

    #[test]
    fn test_line_management_gated_on_pending() {
        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.cancel().unwrap();
        assert!(matches!(
            txn.clear_lines(),
            Err(SaleError::NotPending { .. })
        ));
        assert!(matches!(
            txn.remove_line(0),
            Err(SaleError::NotPending { .. })
        ));
    }

    #[test]
    fn test_apply_points_requires_attached_customer() {
        let customer = Customer::new(
            "Bob",
            "Johnson",
            CustomerTier::Vip,
            Currency::USD,
            today(),
        );
        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        assert_eq!(
            txn.apply_loyalty_points(&customer, dec!(1)),
            Err(SaleError::NoCustomerAttached)
        );
    }
}
