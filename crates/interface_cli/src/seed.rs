//! Demo seed data
//!
//! Stocks the shelves and registers a few customers so the menus have
//! something to show on a fresh start.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};
use domain_catalog::{Catalog, Product, ProductCategory};
use domain_customer::{Customer, CustomerDirectory, CustomerTier};

/// Fills the catalog and directory with the demo inventory
pub fn seed_demo_data(
    catalog: &mut Catalog,
    directory: &mut CustomerDirectory,
    currency: Currency,
    today: NaiveDate,
) {
    let usd = |amount| Money::new(amount, currency);

    let products = [
        Product::standard(
            "Coca Cola 330ml",
            usd(dec!(2.50)),
            usd(dec!(1.20)),
            50,
            ProductCategory::Beverages,
            Rate::new(dec!(0.3)),
        )
        .with_description("Classic Coca Cola can")
        .with_supplier("Coca Cola Co"),
        Product::standard(
            "Lay's Chips Original",
            usd(dec!(3.00)),
            usd(dec!(1.50)),
            30,
            ProductCategory::Snacks,
            Rate::new(dec!(0.25)),
        )
        .with_description("Crispy potato chips")
        .with_supplier("Frito-Lay"),
        Product::perishable(
            "Fresh Milk 1L",
            usd(dec!(4.00)),
            usd(dec!(2.50)),
            15,
            ProductCategory::Dairy,
            today + chrono::Duration::days(6),
            7,
            Rate::new(dec!(0.2)),
        )
        .with_description("Whole milk")
        .with_supplier("Dairy Farm"),
        Product::bulk(
            "Rice Premium",
            usd(dec!(2.50)),
            usd(dec!(1.80)),
            100,
            ProductCategory::Other,
            "kg",
            dec!(0.5),
        )
        .with_description("Premium jasmine rice")
        .with_supplier("Rice Supplier"),
        Product::standard(
            "Chocolate Bar",
            usd(dec!(2.00)),
            usd(dec!(1.00)),
            8,
            ProductCategory::Snacks,
            Rate::new(dec!(0.4)),
        )
        .with_description("Dark chocolate bar")
        .with_supplier("Chocolate Co"),
    ];
    for product in products {
        // Freshly-built products cannot collide
        let _ = catalog.insert(product);
    }

    let customers = [
        Customer::new("John", "Doe", CustomerTier::Regular, currency, today)
            .with_email("john.doe@email.com")
            .with_phone("+1234567890"),
        Customer::new("Jane", "Smith", CustomerTier::Premium, currency, today)
            .with_email("jane.smith@email.com")
            .with_phone("+1234567891"),
        Customer::new("Bob", "Johnson", CustomerTier::Vip, currency, today)
            .with_email("bob.johnson@email.com")
            .with_phone("+1234567892"),
    ];
    for customer in customers {
        let _ = directory.insert(customer);
    }

    tracing::info!(
        products = catalog.len(),
        customers = directory.len(),
        "seeded demo data"
    );
}
