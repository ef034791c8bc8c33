//! Stock control integration tests
//!
//! Covers the stock lifecycle as the menu layer drives it: receiving
//! deliveries, selling down to low-stock, and the alert queries the
//! inventory reports are built from.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, Rate};
use domain_catalog::{Catalog, CatalogError, Product, ProductCategory};
use rust_decimal_macros::dec;

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
}

fn chips() -> Product {
    Product::standard(
        "Lay's Chips Original",
        usd(dec!(3.00)),
        usd(dec!(1.50)),
        30,
        ProductCategory::Snacks,
        Rate::new(dec!(0.25)),
    )
    .with_supplier("Frito-Lay")
    .with_stock_levels(10, 200)
}

mod stock_lifecycle {
    use super::*;

    #[test]
    fn test_sell_down_to_low_stock_alert() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(chips()).unwrap();

        assert!(catalog.low_stock().is_empty());

        catalog.get_mut(id).unwrap().reduce_stock(22).unwrap();
        let low = catalog.low_stock();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].restock_recommendation(), 192);
    }

    #[test]
    fn test_out_of_stock_query() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(chips()).unwrap();
        catalog.get_mut(id).unwrap().reduce_stock(30).unwrap();

        assert_eq!(catalog.out_of_stock().len(), 1);
        let err = catalog.get_mut(id).unwrap().reduce_stock(1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InsufficientStock {
                product: "Lay's Chips Original".to_string(),
                available: 0,
                requested: 1,
            }
        );
    }

    #[test]
    fn test_restock_delivery_clamps_to_ceiling() {
        let mut catalog = Catalog::new();
        let id = catalog.insert(chips()).unwrap();

        catalog.get_mut(id).unwrap().add_stock(500);
        assert_eq!(catalog.get(id).unwrap().current_stock(), 200);
        assert_eq!(catalog.overstocked().len(), 1);
    }
}

mod tag_search {
    use super::*;

    #[test]
    fn test_find_by_tag() {
        let mut catalog = Catalog::new();
        let mut snack = chips();
        snack.add_tag("promo");
        catalog.insert(snack).unwrap();
        catalog
            .insert(Product::standard(
                "Chocolate Bar",
                usd(dec!(2.00)),
                usd(dec!(1.00)),
                8,
                ProductCategory::Snacks,
                Rate::new(dec!(0.4)),
            ))
            .unwrap();

        assert_eq!(catalog.find_by_tag("promo").len(), 1);
        assert!(catalog.find_by_tag("clearance").is_empty());
    }
}

mod valuation {
    use super::*;

    #[test]
    fn test_category_value_counts_only_that_category() {
        let mut catalog = Catalog::new();
        catalog.insert(chips()).unwrap();
        catalog
            .insert(Product::standard(
                "Detergent",
                usd(dec!(6.00)),
                usd(dec!(4.00)),
                10,
                ProductCategory::Household,
                Rate::new(dec!(0.5)),
            ))
            .unwrap();

        // 30 * 1.50 * 1.25
        assert_eq!(
            catalog
                .category_value(ProductCategory::Snacks, today())
                .unwrap()
                .amount(),
            dec!(56.25)
        );
        // 10 * 4.00 * 1.5
        assert_eq!(
            catalog
                .category_value(ProductCategory::Household, today())
                .unwrap()
                .amount(),
            dec!(60.00)
        );
    }
}
