//! Product entity and pricing policies
//!
//! A product is one catalog line: identity, stock counters, and a
//! [`PricePolicy`] variant that determines its selling price.
//!
//! # Invariants
//!
//! - `current_stock` never exceeds `max_stock_level` and never goes negative
//! - `reduce_stock` is atomic: it either decrements fully or not at all
//! - Selling price is a pure function of the product's fields and the
//!   calendar date passed by the caller

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, ProductId, Rate};

use crate::error::CatalogError;

/// Product categories carried by every catalog line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Beverages,
    Snacks,
    Dairy,
    Bakery,
    Household,
    Electronics,
    HealthBeauty,
    Other,
}

impl ProductCategory {
    /// All categories, in menu order
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Beverages,
        ProductCategory::Snacks,
        ProductCategory::Dairy,
        ProductCategory::Bakery,
        ProductCategory::Household,
        ProductCategory::Electronics,
        ProductCategory::HealthBeauty,
        ProductCategory::Other,
    ];

    /// Returns the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Beverages => "Beverages",
            ProductCategory::Snacks => "Snacks",
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Bakery => "Bakery",
            ProductCategory::Household => "Household",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::HealthBeauty => "Health & Beauty",
            ProductCategory::Other => "Other",
        }
    }

    /// Parses a display name, falling back to `Other` for unknown input
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(ProductCategory::Other)
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Variant-specific pricing behavior
///
/// Kept as a sum type so call sites that care whether a line is bulk-priced
/// (cart validation, totaling) match on the variant explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PricePolicy {
    /// Standard markup over cost price
    Standard {
        /// Markup fraction over cost (0.3 = 30%)
        markup: Rate,
    },

    /// Perishable goods discounted near their expiration date
    Perishable {
        /// Expiration date
        expires_on: NaiveDate,
        /// Full shelf life in days
        shelf_life_days: u32,
        /// Discount fraction applied when near expiration
        near_expiry_discount: Rate,
    },

    /// Goods sold by weight or volume with a minimum order
    Bulk {
        /// Unit label (kg, liters, ...)
        unit: String,
        /// Price per unit
        price_per_unit: Money,
        /// Minimum orderable quantity
        minimum_quantity: Decimal,
    },
}

impl PricePolicy {
    /// Returns the variant name for display
    pub fn kind(&self) -> &'static str {
        match self {
            PricePolicy::Standard { .. } => "Standard",
            PricePolicy::Perishable { .. } => "Perishable",
            PricePolicy::Bulk { .. } => "Bulk",
        }
    }
}

/// One catalog line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    category: ProductCategory,
    supplier: Option<String>,
    base_price: Money,
    cost_price: Money,
    current_stock: u32,
    min_stock_level: u32,
    max_stock_level: u32,
    active: bool,
    tags: Vec<String>,
    policy: PricePolicy,
}

impl Product {
    /// Creates a standard markup-priced product
    pub fn standard(
        name: impl Into<String>,
        base_price: Money,
        cost_price: Money,
        stock: u32,
        category: ProductCategory,
        markup: Rate,
    ) -> Self {
        Self::new(
            name,
            base_price,
            cost_price,
            stock,
            category,
            PricePolicy::Standard { markup },
            10,
            1000,
        )
    }

    /// Creates a perishable product with a near-expiry discount
    pub fn perishable(
        name: impl Into<String>,
        base_price: Money,
        cost_price: Money,
        stock: u32,
        category: ProductCategory,
        expires_on: NaiveDate,
        shelf_life_days: u32,
        near_expiry_discount: Rate,
    ) -> Self {
        Self::new(
            name,
            base_price,
            cost_price,
            stock,
            category,
            PricePolicy::Perishable {
                expires_on,
                shelf_life_days,
                near_expiry_discount,
            },
            5,
            500,
        )
    }

    /// Creates a bulk product priced per unit of weight or volume
    pub fn bulk(
        name: impl Into<String>,
        price_per_unit: Money,
        cost_price: Money,
        stock: u32,
        category: ProductCategory,
        unit: impl Into<String>,
        minimum_quantity: Decimal,
    ) -> Self {
        Self::new(
            name,
            price_per_unit,
            cost_price,
            stock,
            category,
            PricePolicy::Bulk {
                unit: unit.into(),
                price_per_unit,
                minimum_quantity,
            },
            10,
            1000,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        name: impl Into<String>,
        base_price: Money,
        cost_price: Money,
        stock: u32,
        category: ProductCategory,
        policy: PricePolicy,
        min_stock_level: u32,
        max_stock_level: u32,
    ) -> Self {
        Self {
            id: ProductId::new_v7(),
            name: name.into(),
            description: String::new(),
            category,
            supplier: None,
            base_price,
            cost_price,
            current_stock: stock.min(max_stock_level),
            min_stock_level,
            max_stock_level,
            active: true,
            tags: Vec::new(),
            policy,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the supplier
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Sets the stock thresholds, clamping current stock to the new ceiling
    pub fn with_stock_levels(mut self, min: u32, max: u32) -> Self {
        self.min_stock_level = min;
        self.max_stock_level = max;
        self.current_stock = self.current_stock.min(max);
        self
    }

    // Accessors

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn cost_price(&self) -> Money {
        self.cost_price
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn min_stock_level(&self) -> u32 {
        self.min_stock_level
    }

    pub fn max_stock_level(&self) -> u32 {
        self.max_stock_level
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn policy(&self) -> &PricePolicy {
        &self.policy
    }

    /// Derived barcode for receipt and shelf labels
    pub fn barcode(&self) -> String {
        let hex = self.id.as_uuid().simple().to_string();
        format!("BAR-{}", &hex[..12])
    }

    // Setters

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_base_price(&mut self, price: Money) {
        self.base_price = price;
    }

    pub fn set_cost_price(&mut self, cost: Money) {
        self.cost_price = cost;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // Pricing

    /// Computes the selling price on the given date
    ///
    /// Pure function of the product's fields: standard products price off
    /// cost plus markup, perishables discount near expiration, bulk products
    /// quote their per-unit price.
    pub fn selling_price(&self, today: NaiveDate) -> Money {
        match &self.policy {
            PricePolicy::Standard { markup } => self
                .cost_price
                .multiply(Decimal::ONE + markup.as_decimal()),
            PricePolicy::Perishable {
                near_expiry_discount,
                ..
            } => {
                if self.is_near_expiration(today) {
                    self.base_price.multiply(near_expiry_discount.complement())
                } else {
                    self.base_price
                }
            }
            PricePolicy::Bulk { price_per_unit, .. } => *price_per_unit,
        }
    }

    /// Prices a given quantity
    ///
    /// For bulk products a request below the minimum is silently charged at
    /// the minimum; cart validation rejects such requests separately, so the
    /// clamp here only matters for direct price quotes.
    pub fn price_for_quantity(&self, quantity: Decimal, today: NaiveDate) -> Money {
        match &self.policy {
            PricePolicy::Bulk {
                price_per_unit,
                minimum_quantity,
                ..
            } => price_per_unit.multiply(quantity.max(*minimum_quantity)),
            _ => self.selling_price(today).multiply(quantity),
        }
    }

    /// Days until expiration; `None` for non-perishable products
    pub fn days_until_expiration(&self, today: NaiveDate) -> Option<i64> {
        match &self.policy {
            PricePolicy::Perishable { expires_on, .. } => {
                Some((*expires_on - today).num_days())
            }
            _ => None,
        }
    }

    /// True when a perishable product is within 20% of its shelf life
    pub fn is_near_expiration(&self, today: NaiveDate) -> bool {
        match &self.policy {
            PricePolicy::Perishable {
                expires_on,
                shelf_life_days,
                ..
            } => {
                let days_left = (*expires_on - today).num_days();
                Decimal::from(days_left) <= Decimal::from(*shelf_life_days) * dec!(0.2)
            }
            _ => false,
        }
    }

    /// True when a perishable product is past its expiration date
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        matches!(self.days_until_expiration(today), Some(days) if days < 0)
    }

    // Stock management

    /// Removes stock, atomically with the availability check
    ///
    /// # Errors
    ///
    /// Rejects a zero quantity and any quantity above the current stock;
    /// on rejection the stock count is untouched.
    pub fn reduce_stock(&mut self, quantity: u32) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity);
        }
        if quantity > self.current_stock {
            return Err(CatalogError::InsufficientStock {
                product: self.name.clone(),
                available: self.current_stock,
                requested: quantity,
            });
        }
        self.current_stock -= quantity;
        Ok(())
    }

    /// Adds stock, clamping the result to the maximum stock level
    pub fn add_stock(&mut self, quantity: u32) {
        self.current_stock = self
            .current_stock
            .saturating_add(quantity)
            .min(self.max_stock_level);
    }

    /// True when stock has fallen to the minimum level or below
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock_level
    }

    /// True when stock sits at 90% of the ceiling or above
    pub fn is_overstocked(&self) -> bool {
        self.current_stock as u64 * 10 >= self.max_stock_level as u64 * 9
    }

    /// Suggested restock quantity when low, zero otherwise
    pub fn restock_recommendation(&self) -> u32 {
        if self.is_low_stock() {
            self.max_stock_level - self.current_stock
        } else {
            0
        }
    }

    // Valuation

    /// Profit margin over cost, as a percentage
    pub fn profit_margin(&self, today: NaiveDate) -> Decimal {
        if self.cost_price.is_zero() {
            return Decimal::ZERO;
        }
        let selling = self.selling_price(today);
        (selling - self.cost_price).amount() / self.cost_price.amount() * dec!(100)
    }

    /// Selling value of the stock on hand
    pub fn inventory_value(&self, today: NaiveDate) -> Money {
        self.selling_price(today)
            .multiply(Decimal::from(self.current_stock))
    }

    /// Cost value of the stock on hand
    pub fn inventory_cost(&self) -> Money {
        self.cost_price.multiply(Decimal::from(self.current_stock))
    }

    // Tags

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Scales the selling price by `change` (0.10 = +10%)
    ///
    /// Adjusts the fields the selling price actually derives from, so the
    /// new quote moves by exactly the requested fraction for every variant.
    pub fn adjust_price(&mut self, change: Rate) {
        let factor = Decimal::ONE + change.as_decimal();
        self.base_price = self.base_price.multiply(factor);
        match &mut self.policy {
            PricePolicy::Standard { markup } => {
                *markup =
                    Rate::new((Decimal::ONE + markup.as_decimal()) * factor - Decimal::ONE);
            }
            PricePolicy::Bulk { price_per_unit, .. } => {
                *price_per_unit = price_per_unit.multiply(factor);
            }
            PricePolicy::Perishable { .. } => {}
        }
    }
}
