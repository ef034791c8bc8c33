//! Catalog arena
//!
//! The catalog owns every [`Product`]. Other components hold [`ProductId`]s
//! and borrow products through it, so stock mutation always goes through a
//! single owner.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, ProductId, Rate};

use crate::error::CatalogError;
use crate::product::{Product, ProductCategory};

/// In-memory product catalog
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
    currency: Option<core_kernel::Currency>,
}

/// Aggregate numbers for the inventory report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub active_products: usize,
    pub total_value: Option<Money>,
    pub total_cost: Option<Money>,
    pub potential_profit: Option<Money>,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub overstocked_count: usize,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, rejecting duplicate identifiers
    pub fn insert(&mut self, product: Product) -> Result<ProductId, CatalogError> {
        let id = product.id();
        if self.products.contains_key(&id) {
            return Err(CatalogError::DuplicateProduct(product.name().to_string()));
        }
        self.currency.get_or_insert(product.base_price().currency());
        tracing::debug!(product = product.name(), %id, "product added to catalog");
        self.products.insert(id, product);
        Ok(id)
    }

    /// Removes a product, returning it
    pub fn remove(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .remove(&id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Looks up a product
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Looks up a product for mutation
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    /// Iterates all products, sorted by name for stable listings
    pub fn iter(&self) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.values().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    /// Case-insensitive name substring search
    pub fn find_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.iter()
            .into_iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Products carrying the given tag
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Product> {
        self.iter().into_iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Products in the given category
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.iter()
            .into_iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Products from the given supplier
    pub fn by_supplier(&self, supplier: &str) -> Vec<&Product> {
        self.iter()
            .into_iter()
            .filter(|p| p.supplier() == Some(supplier))
            .collect()
    }

    /// All known suppliers, deduplicated and sorted
    pub fn suppliers(&self) -> Vec<String> {
        self.products
            .values()
            .filter_map(|p| p.supplier().map(str::to_string))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Active products at or below their minimum stock level
    pub fn low_stock(&self) -> Vec<&Product> {
        self.iter()
            .into_iter()
            .filter(|p| p.is_active() && p.is_low_stock())
            .collect()
    }

    /// Active products with no stock at all
    pub fn out_of_stock(&self) -> Vec<&Product> {
        self.iter()
            .into_iter()
            .filter(|p| p.is_active() && p.current_stock() == 0)
            .collect()
    }

    /// Active products near their stock ceiling
    pub fn overstocked(&self) -> Vec<&Product> {
        self.iter()
            .into_iter()
            .filter(|p| p.is_active() && p.is_overstocked())
            .collect()
    }

    /// Selling value of all active stock
    pub fn total_inventory_value(&self, today: NaiveDate) -> Option<Money> {
        self.sum_active(|p| p.inventory_value(today))
    }

    /// Cost value of all active stock
    pub fn total_inventory_cost(&self) -> Option<Money> {
        self.sum_active(|p| p.inventory_cost())
    }

    /// Difference between selling value and cost of active stock
    pub fn potential_profit(&self, today: NaiveDate) -> Option<Money> {
        match (self.total_inventory_value(today), self.total_inventory_cost()) {
            (Some(value), Some(cost)) => Some(value - cost),
            _ => None,
        }
    }

    /// Selling value of active stock in one category
    pub fn category_value(&self, category: ProductCategory, today: NaiveDate) -> Option<Money> {
        let currency = self.currency?;
        Some(
            self.by_category(category)
                .into_iter()
                .filter(|p| p.is_active())
                .fold(Money::zero(currency), |acc, p| {
                    acc + p.inventory_value(today)
                }),
        )
    }

    /// Scales every product's selling price by `change`
    pub fn adjust_all_prices(&mut self, change: Rate) {
        for product in self.products.values_mut() {
            product.adjust_price(change);
        }
        tracing::info!(change = %change, "repriced entire catalog");
    }

    /// Scales selling prices in one category by `change`
    pub fn adjust_category_prices(&mut self, category: ProductCategory, change: Rate) {
        for product in self
            .products
            .values_mut()
            .filter(|p| p.category() == category)
        {
            product.adjust_price(change);
        }
        tracing::info!(category = %category, change = %change, "repriced category");
    }

    /// Deactivates perishables past their expiration date
    ///
    /// Returns how many products were switched off.
    pub fn deactivate_expired(&mut self, today: NaiveDate) -> usize {
        let mut deactivated = 0;
        for product in self.products.values_mut() {
            if product.is_active() && product.is_expired(today) {
                product.set_active(false);
                deactivated += 1;
                tracing::info!(product = product.name(), "deactivated expired product");
            }
        }
        deactivated
    }

    /// Total number of products, active or not
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of active products
    pub fn active_count(&self) -> usize {
        self.products.values().filter(|p| p.is_active()).count()
    }

    /// Aggregate numbers for the inventory report
    pub fn summary(&self, today: NaiveDate) -> InventorySummary {
        InventorySummary {
            total_products: self.len(),
            active_products: self.active_count(),
            total_value: self.total_inventory_value(today),
            total_cost: self.total_inventory_cost(),
            potential_profit: self.potential_profit(today),
            low_stock_count: self.low_stock().len(),
            out_of_stock_count: self.out_of_stock().len(),
            overstocked_count: self.overstocked().len(),
        }
    }

    fn sum_active(&self, value: impl Fn(&Product) -> Money) -> Option<Money> {
        let currency = self.currency?;
        Some(
            self.products
                .values()
                .filter(|p| p.is_active())
                .fold(Money::zero(currency), |acc, p| acc + value(p)),
        )
    }
}
