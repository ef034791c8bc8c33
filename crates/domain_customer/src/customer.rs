//! Customer entity and tier policy
//!
//! # Invariants
//!
//! - The loyalty point balance never goes negative: redemption is rejected
//!   when short, and reversal paths clamp at zero
//! - Tier changes only happen through an explicit `set_tier` call

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, Rate};

use crate::error::CustomerError;

/// Customer classification driving discount and loyalty accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    Regular,
    Premium,
    Vip,
    Employee,
}

impl CustomerTier {
    /// All tiers, in menu order
    pub const ALL: [CustomerTier; 4] = [
        CustomerTier::Regular,
        CustomerTier::Premium,
        CustomerTier::Vip,
        CustomerTier::Employee,
    ];

    /// Flat discount applied to a purchase subtotal
    pub fn discount_rate(&self) -> Rate {
        match self {
            CustomerTier::Regular => Rate::ZERO,
            CustomerTier::Premium => Rate::new(dec!(0.05)),
            CustomerTier::Vip => Rate::new(dec!(0.10)),
            CustomerTier::Employee => Rate::new(dec!(0.15)),
        }
    }

    /// Multiplier on the 1% base loyalty accrual rate
    pub fn points_multiplier(&self) -> Decimal {
        match self {
            CustomerTier::Regular => dec!(1.0),
            CustomerTier::Premium => dec!(1.5),
            CustomerTier::Vip => dec!(2.0),
            CustomerTier::Employee => dec!(3.0),
        }
    }

    /// Returns the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Premium => "Premium",
            CustomerTier::Vip => "VIP",
            CustomerTier::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    tier: CustomerTier,
    total_spent: Money,
    transaction_count: u32,
    loyalty_points: Decimal,
    member_since: NaiveDate,
    active: bool,
}

impl Customer {
    /// Creates a new customer account with an empty history
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        tier: CustomerTier,
        currency: core_kernel::Currency,
        member_since: NaiveDate,
    ) -> Self {
        Self {
            id: CustomerId::new_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            tier,
            total_spent: Money::zero(currency),
            transaction_count: 0,
            loyalty_points: Decimal::ZERO,
            member_since,
            active: true,
        }
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    // Accessors

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn tier(&self) -> CustomerTier {
        self.tier
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    pub fn transaction_count(&self) -> u32 {
        self.transaction_count
    }

    pub fn loyalty_points(&self) -> Decimal {
        self.loyalty_points
    }

    pub fn member_since(&self) -> NaiveDate {
        self.member_since
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // Setters

    pub fn set_tier(&mut self, tier: CustomerTier) {
        self.tier = tier;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    // Business operations

    /// Records a settled purchase against this account
    ///
    /// Adds to cumulative spend, bumps the transaction count, and accrues
    /// loyalty points at 1% of the amount times the tier multiplier.
    ///
    /// Also called with a **negative** amount when a sale is refunded: spend
    /// is backed out and the matching accrual is subtracted. The point
    /// balance clamps at zero so the non-negativity invariant holds even if
    /// points were spent in between.
    pub fn record_purchase(&mut self, amount: Money) {
        self.total_spent = self.total_spent + amount;
        self.transaction_count += 1;

        let accrual = amount.amount() * dec!(0.01) * self.tier.points_multiplier();
        self.loyalty_points = (self.loyalty_points + accrual).max(Decimal::ZERO);
    }

    /// Grants loyalty points outside the purchase accrual path
    pub fn award_points(&mut self, points: Decimal) {
        self.loyalty_points = (self.loyalty_points + points).max(Decimal::ZERO);
    }

    /// Spends loyalty points
    ///
    /// # Errors
    ///
    /// Fails without mutating when the balance is short or the amount is
    /// not positive.
    pub fn redeem_points(&mut self, points: Decimal) -> Result<(), CustomerError> {
        if points <= Decimal::ZERO {
            return Err(CustomerError::InvalidPointAmount);
        }
        if self.loyalty_points < points {
            return Err(CustomerError::InsufficientPoints {
                balance: self.loyalty_points,
                requested: points,
            });
        }
        self.loyalty_points -= points;
        Ok(())
    }

    /// Claws back points on a refund, clamping at zero
    ///
    /// Unlike [`redeem_points`](Self::redeem_points) this never fails: a
    /// balance already spent below the reversal amount simply empties.
    pub fn forfeit_points(&mut self, points: Decimal) {
        self.loyalty_points = (self.loyalty_points - points.max(Decimal::ZERO)).max(Decimal::ZERO);
    }

    /// Advisory tier-upgrade signal; never applied automatically
    pub fn upgrade_eligible(&self) -> bool {
        match self.tier {
            CustomerTier::Regular => self.total_spent.amount() >= dec!(500),
            CustomerTier::Premium => self.total_spent.amount() >= dec!(2000),
            CustomerTier::Vip | CustomerTier::Employee => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn member_since() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
    }

    fn vip() -> Customer {
        Customer::new("Bob", "Johnson", CustomerTier::Vip, Currency::USD, member_since())
    }

    #[test]
    fn test_tier_policy_table() {
        assert_eq!(CustomerTier::Regular.discount_rate().as_decimal(), dec!(0));
        assert_eq!(CustomerTier::Premium.discount_rate().as_decimal(), dec!(0.05));
        assert_eq!(CustomerTier::Vip.discount_rate().as_decimal(), dec!(0.10));
        assert_eq!(CustomerTier::Employee.discount_rate().as_decimal(), dec!(0.15));

        assert_eq!(CustomerTier::Regular.points_multiplier(), dec!(1.0));
        assert_eq!(CustomerTier::Premium.points_multiplier(), dec!(1.5));
        assert_eq!(CustomerTier::Vip.points_multiplier(), dec!(2.0));
        assert_eq!(CustomerTier::Employee.points_multiplier(), dec!(3.0));
    }

    #[test]
    fn test_record_purchase_accrues_tier_scaled_points() {
        let mut customer = vip();
        customer.record_purchase(Money::new(dec!(100.00), Currency::USD));

        assert_eq!(customer.total_spent().amount(), dec!(100.00));
        assert_eq!(customer.transaction_count(), 1);
        // 100 * 1% * 2.0
        assert_eq!(customer.loyalty_points(), dec!(2.00));
    }

    #[test]
    fn test_record_purchase_negative_backs_out_spend_and_points() {
        let mut customer = vip();
        customer.record_purchase(Money::new(dec!(100.00), Currency::USD));
        customer.record_purchase(Money::new(dec!(-100.00), Currency::USD));

        assert!(customer.total_spent().is_zero());
        assert_eq!(customer.transaction_count(), 2);
        assert_eq!(customer.loyalty_points(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_accrual_clamps_at_zero() {
        let mut customer = vip();
        customer.record_purchase(Money::new(dec!(50.00), Currency::USD));
        customer.redeem_points(dec!(1)).unwrap();
        // Reversal accrual (-2.0) exceeds the remaining 0.0 balance
        customer.record_purchase(Money::new(dec!(-100.00), Currency::USD));
        assert_eq!(customer.loyalty_points(), Decimal::ZERO);
    }

    #[test]
    fn test_redeem_points_rejects_overdraw() {
        let mut customer = vip();
        customer.award_points(dec!(5));

        let err = customer.redeem_points(dec!(6)).unwrap_err();
        assert_eq!(
            err,
            CustomerError::InsufficientPoints {
                balance: dec!(5),
                requested: dec!(6),
            }
        );
        assert_eq!(customer.loyalty_points(), dec!(5));

        customer.redeem_points(dec!(5)).unwrap();
        assert_eq!(customer.loyalty_points(), Decimal::ZERO);
    }

    #[test]
    fn test_redeem_points_rejects_non_positive() {
        let mut customer = vip();
        assert_eq!(
            customer.redeem_points(dec!(0)),
            Err(CustomerError::InvalidPointAmount)
        );
    }

    #[test]
    fn test_forfeit_points_clamps() {
        let mut customer = vip();
        customer.award_points(dec!(3));
        customer.forfeit_points(dec!(10));
        assert_eq!(customer.loyalty_points(), Decimal::ZERO);
    }

    #[test]
    fn test_upgrade_eligibility_thresholds() {
        let mut regular = Customer::new(
            "John",
            "Doe",
            CustomerTier::Regular,
            Currency::USD,
            member_since(),
        );
        assert!(!regular.upgrade_eligible());
        regular.record_purchase(Money::new(dec!(500.00), Currency::USD));
        assert!(regular.upgrade_eligible());

        let mut premium = Customer::new(
            "Jane",
            "Smith",
            CustomerTier::Premium,
            Currency::USD,
            member_since(),
        );
        premium.record_purchase(Money::new(dec!(1999.00), Currency::USD));
        assert!(!premium.upgrade_eligible());
        premium.record_purchase(Money::new(dec!(1.00), Currency::USD));
        assert!(premium.upgrade_eligible());

        assert!(!vip().upgrade_eligible());
    }
}
