//! Integration Tests for the Retail Store Core
//!
//! These tests verify cross-domain workflows and end-to-end scenarios
//! that involve multiple crates working together.

use chrono::NaiveDate;
use core_kernel::{Currency, CustomerId, Money, ProductId, Rate, TransactionId};
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
}

mod sale_settlement_workflow {
    use super::*;
    use domain_catalog::{Catalog, Product, ProductCategory};
    use domain_customer::{Customer, CustomerDirectory, CustomerTier};
    use domain_sales::{PaymentMethod, Transaction, TransactionStatus};

    /// Tests a complete sale: cart, totals, payment, finalize
    #[test]
    fn test_complete_sale_workflow() {
        let mut catalog = Catalog::new();
        let product_id = catalog
            .insert(Product::standard(
                "Widget",
                Money::new(dec!(10.00), Currency::USD),
                Money::new(dec!(8.00), Currency::USD),
                50,
                ProductCategory::Household,
                Rate::new(dec!(0.25)),
            ))
            .unwrap();

        let mut directory = CustomerDirectory::new();
        let customer_id = directory
            .insert(Customer::new(
                "Bob",
                "Johnson",
                CustomerTier::Vip,
                Currency::USD,
                today(),
            ))
            .unwrap();

        let mut txn = Transaction::new(Currency::USD, Some(customer_id), "CASHIER-001");
        txn.add_line(&catalog, product_id, dec!(2), Rate::ZERO, None, today())
            .unwrap();

        let totals = txn
            .compute_totals(directory.get(customer_id), Rate::new(dec!(0.08)))
            .unwrap();
        assert_eq!(totals.subtotal.amount(), dec!(18.00));
        assert_eq!(totals.final_total.amount(), dec!(19.44));

        txn.process_payment(PaymentMethod::Cash, Money::new(dec!(25.00), Currency::USD))
            .unwrap();
        txn.finalize(&mut catalog, &mut directory).unwrap();

        assert_eq!(txn.status(), TransactionStatus::Completed);
        assert_eq!(catalog.get(product_id).unwrap().current_stock(), 48);
        assert_eq!(
            directory.get(customer_id).unwrap().total_spent().amount(),
            dec!(19.44)
        );
    }

    /// Tests that a refund undoes the sale's cross-entity effects
    #[test]
    fn test_sale_then_full_refund() {
        let mut catalog = Catalog::new();
        let product_id = catalog
            .insert(Product::standard(
                "Widget",
                Money::new(dec!(10.00), Currency::USD),
                Money::new(dec!(8.00), Currency::USD),
                50,
                ProductCategory::Household,
                Rate::new(dec!(0.25)),
            ))
            .unwrap();
        let mut directory = CustomerDirectory::new();

        let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
        txn.add_line(&catalog, product_id, dec!(3), Rate::ZERO, None, today())
            .unwrap();
        txn.compute_totals(None, Rate::new(dec!(0.08))).unwrap();
        txn.process_payment(PaymentMethod::CreditCard, Money::zero(Currency::USD))
            .unwrap();
        txn.finalize(&mut catalog, &mut directory).unwrap();
        assert_eq!(catalog.get(product_id).unwrap().current_stock(), 47);

        let refunded = txn.refund(&mut catalog, &mut directory, None).unwrap();
        assert_eq!(refunded.amount(), dec!(32.40));
        assert_eq!(txn.status(), TransactionStatus::Refunded);
        assert_eq!(catalog.get(product_id).unwrap().current_stock(), 50);
    }
}

mod pricing_policies {
    use super::*;
    use domain_catalog::{Product, ProductCategory};

    /// Tests standard markup pricing
    #[test]
    fn test_standard_markup_price() {
        let product = Product::standard(
            "Cola",
            Money::new(dec!(2.50), Currency::USD),
            Money::new(dec!(1.20), Currency::USD),
            50,
            ProductCategory::Beverages,
            Rate::new(dec!(0.3)),
        );
        assert_eq!(product.selling_price(today()).amount(), dec!(1.56));
    }

    /// Tests the near-expiry discount window
    #[test]
    fn test_perishable_near_expiry_discount() {
        let milk = Product::perishable(
            "Milk",
            Money::new(dec!(4.00), Currency::USD),
            Money::new(dec!(2.50), Currency::USD),
            15,
            ProductCategory::Dairy,
            today() + chrono::Duration::days(1),
            7,
            Rate::new(dec!(0.2)),
        );
        assert!(milk.is_near_expiration(today()));
        assert_eq!(milk.selling_price(today()).amount(), dec!(3.20));
    }

    /// Tests that bulk quotes clamp below-minimum quantities
    #[test]
    fn test_bulk_minimum_quantity_clamp() {
        let rice = Product::bulk(
            "Rice",
            Money::new(dec!(2.50), Currency::USD),
            Money::new(dec!(1.80), Currency::USD),
            100,
            ProductCategory::Other,
            "kg",
            dec!(0.5),
        );
        assert_eq!(
            rice.price_for_quantity(dec!(0.2), today()),
            rice.price_for_quantity(dec!(0.5), today())
        );
    }
}

mod loyalty_program {
    use super::*;
    use domain_customer::{Customer, CustomerTier};

    /// Tests tier-scaled accrual on purchase
    #[test]
    fn test_purchase_accrues_points() {
        let mut customer = Customer::new(
            "Jane",
            "Smith",
            CustomerTier::Premium,
            Currency::USD,
            today(),
        );
        customer.record_purchase(Money::new(dec!(200.00), Currency::USD));

        // 200 * 1% * 1.5
        assert_eq!(customer.loyalty_points(), dec!(3.00));
    }

    /// Tests that redemption never overdraws the balance
    #[test]
    fn test_redemption_rejects_overdraw() {
        let mut customer = Customer::new(
            "Jane",
            "Smith",
            CustomerTier::Regular,
            Currency::USD,
            today(),
        );
        customer.award_points(dec!(2));

        assert!(customer.redeem_points(dec!(3)).is_err());
        assert_eq!(customer.loyalty_points(), dec!(2));
    }
}

mod money_operations {
    use super::*;

    /// Tests money arithmetic
    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(1000), Currency::USD);
        let b = Money::new(dec!(500), Currency::USD);

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.amount(), dec!(1500));

        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(500));
    }

    /// Tests currency mismatch prevention
    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(1000), Currency::USD);
        let eur = Money::new(dec!(1000), Currency::EUR);

        let result = usd.checked_add(&eur);
        assert!(result.is_err());
    }

    /// Tests rate application
    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(8));
        let subtotal = Money::new(dec!(20.00), Currency::USD);
        assert_eq!(rate.apply(&subtotal).amount(), dec!(1.60));
    }
}

mod identifier_operations {
    use super::*;

    /// Tests product ID generation and parsing
    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new();
        let string = id.to_string();
        let parsed: ProductId = string.parse().unwrap();

        assert_eq!(id, parsed);
    }

    /// Tests transaction ID uniqueness
    #[test]
    fn test_transaction_id_uniqueness() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();

        assert_ne!(id1, id2);
    }

    /// Tests customer ID display format
    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::new();
        let display = id.to_string();

        assert!(display.starts_with("CUS-"));
    }
}
