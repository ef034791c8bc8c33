//! Receipt rendering tests
//!
//! Rendering is pure formatting; these tests pin down that the computed
//! numbers actually appear in the output, not the exact layout.

use core_kernel::{Currency, Money, Rate};
use domain_catalog::Catalog;
use domain_customer::{CustomerDirectory, CustomerTier};
use domain_sales::{render_detailed_receipt, render_receipt, PaymentMethod, Transaction};
use rust_decimal_macros::dec;
use test_utils::{DateFixtures, TestCustomerBuilder, TestProductBuilder};

fn settled_vip_sale() -> (CustomerDirectory, core_kernel::CustomerId, Transaction) {
    let mut catalog = Catalog::new();
    let product_id = catalog
        .insert(
            TestProductBuilder::new()
                .with_name("Widget")
                .with_stock(50)
                .ten_dollar_standard(),
        )
        .unwrap();

    let mut directory = CustomerDirectory::new();
    let customer_id = directory
        .insert(
            TestCustomerBuilder::new()
                .with_name("Bob", "Johnson")
                .with_tier(CustomerTier::Vip)
                .build(),
        )
        .unwrap();

    let mut txn = Transaction::new(Currency::USD, Some(customer_id), "CASHIER-001");
    txn.add_line(
        &catalog,
        product_id,
        dec!(2),
        Rate::ZERO,
        None,
        DateFixtures::today(),
    )
    .unwrap();
    txn.compute_totals(directory.get(customer_id), Rate::new(dec!(0.08)))
        .unwrap();
    txn.process_payment(PaymentMethod::Cash, Money::new(dec!(25.00), Currency::USD))
        .unwrap();
    txn.finalize(&mut catalog, &mut directory).unwrap();

    (directory, customer_id, txn)
}

#[test]
fn test_receipt_contains_computed_numbers() {
    let (directory, customer_id, txn) = settled_vip_sale();
    let receipt = render_receipt("CONVENIENCE STORE", &txn, directory.get(customer_id));

    assert!(receipt.contains("CONVENIENCE STORE"));
    assert!(receipt.contains("Widget"));
    assert!(receipt.contains("$18.00"), "discounted subtotal: {receipt}");
    assert!(receipt.contains("$1.44"), "tax: {receipt}");
    assert!(receipt.contains("$19.44"), "final total: {receipt}");
    assert!(receipt.contains("Bob Johnson"));
    assert!(receipt.contains("VIP"));
    assert!(receipt.contains("Completed"));
}

#[test]
fn test_receipt_shows_cash_change() {
    let (directory, customer_id, txn) = settled_vip_sale();
    let receipt = render_receipt("CONVENIENCE STORE", &txn, directory.get(customer_id));
    // 25.00 tendered against 19.44
    assert!(receipt.contains("$5.56"), "change: {receipt}");
}

#[test]
fn test_detailed_receipt_breaks_down_payment_and_loyalty() {
    let (directory, customer_id, txn) = settled_vip_sale();
    let receipt =
        render_detailed_receipt("CONVENIENCE STORE", &txn, directory.get(customer_id));

    assert!(receipt.contains("ITEMS PURCHASED"));
    assert!(receipt.contains("FINANCIAL BREAKDOWN"));
    assert!(receipt.contains("PAYMENT INFORMATION"));
    assert!(receipt.contains("Cash"));
    assert!(receipt.contains("$19.44"));
    assert!(receipt.contains("LOYALTY PROGRAM"));
    assert!(receipt.contains("0.3888"), "points earned: {receipt}");
}

#[test]
fn test_pending_receipt_renders_without_totals() {
    let mut catalog = Catalog::new();
    let product_id = catalog
        .insert(TestProductBuilder::new().with_name("Widget").ten_dollar_standard())
        .unwrap();
    let mut txn = Transaction::new(Currency::USD, None, "CASHIER-001");
    txn.add_line(
        &catalog,
        product_id,
        dec!(1),
        Rate::ZERO,
        None,
        DateFixtures::today(),
    )
    .unwrap();

    let receipt = render_receipt("CONVENIENCE STORE", &txn, None);
    assert!(receipt.contains("Widget"));
    assert!(receipt.contains("Pending"));
    assert!(!receipt.contains("TOTAL:"));
}
