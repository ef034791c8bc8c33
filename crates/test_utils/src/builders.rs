//! Test data builders
//!
//! Builder patterns for constructing test entities with sensible defaults.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, Rate};
use domain_catalog::{Product, ProductCategory};
use domain_customer::{Customer, CustomerTier};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for standard, perishable, and bulk test products
pub struct TestProductBuilder {
    name: String,
    base_price: Money,
    cost_price: Money,
    stock: u32,
    category: ProductCategory,
    supplier: Option<String>,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: "Test Product".to_string(),
            base_price: MoneyFixtures::usd(dec!(10.00)),
            cost_price: MoneyFixtures::usd(dec!(8.00)),
            stock: 50,
            category: ProductCategory::Other,
            supplier: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_base_price(mut self, price: Money) -> Self {
        self.base_price = price;
        self
    }

    pub fn with_cost_price(mut self, cost: Money) -> Self {
        self.cost_price = cost;
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Builds a standard product with the given markup
    pub fn standard(self, markup: Rate) -> Product {
        let product = Product::standard(
            self.name,
            self.base_price,
            self.cost_price,
            self.stock,
            self.category,
            markup,
        );
        match self.supplier {
            Some(supplier) => product.with_supplier(supplier),
            None => product,
        }
    }

    /// Builds a standard product selling at exactly $10 (cost 8.00 + 25%)
    pub fn ten_dollar_standard(self) -> Product {
        self.with_base_price(MoneyFixtures::usd(dec!(10.00)))
            .with_cost_price(MoneyFixtures::usd(dec!(8.00)))
            .standard(Rate::new(dec!(0.25)))
    }

    /// Builds a perishable product expiring on the given date
    pub fn perishable(
        self,
        expires_on: NaiveDate,
        shelf_life_days: u32,
        near_expiry_discount: Rate,
    ) -> Product {
        let product = Product::perishable(
            self.name,
            self.base_price,
            self.cost_price,
            self.stock,
            self.category,
            expires_on,
            shelf_life_days,
            near_expiry_discount,
        );
        match self.supplier {
            Some(supplier) => product.with_supplier(supplier),
            None => product,
        }
    }

    /// Builds a bulk product; the base price doubles as the per-unit price
    pub fn bulk(self, unit: impl Into<String>, minimum_quantity: Decimal) -> Product {
        let product = Product::bulk(
            self.name,
            self.base_price,
            self.cost_price,
            self.stock,
            self.category,
            unit,
            minimum_quantity,
        );
        match self.supplier {
            Some(supplier) => product.with_supplier(supplier),
            None => product,
        }
    }
}

/// Builder for test customers
pub struct TestCustomerBuilder {
    first_name: String,
    last_name: String,
    tier: CustomerTier,
    currency: Currency,
    member_since: NaiveDate,
    points: Decimal,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            tier: CustomerTier::Regular,
            currency: MoneyFixtures::currency(),
            member_since: DateFixtures::today(),
            points: Decimal::ZERO,
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn with_tier(mut self, tier: CustomerTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_points(mut self, points: Decimal) -> Self {
        self.points = points;
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        let mut customer = Customer::new(
            self.first_name,
            self.last_name,
            self.tier,
            self.currency,
            self.member_since,
        );
        if self.points > Decimal::ZERO {
            customer.award_points(self.points);
        }
        customer
    }
}
