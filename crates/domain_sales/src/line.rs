//! Sale line construction
//!
//! A line snapshots everything it needs from the product at creation time:
//! the unit price is captured once and stays frozen even if the catalog
//! price changes before settlement.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, ProductId, Rate};
use domain_catalog::{CatalogError, PricePolicy, Product};

use crate::error::SaleError;

/// One priced entry in a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    product_id: ProductId,
    product_name: String,
    quantity: Decimal,
    /// Whole stock units this line consumes (`ceil(quantity)`)
    units: u32,
    unit_price: Money,
    discount: Rate,
    /// Pre-discount line amount, with bulk minimum pricing applied
    gross: Money,
    subtotal: Money,
    note: Option<String>,
}

impl SaleLine {
    /// Builds a line for `quantity` of `product`, validating sale rules
    ///
    /// Stock is checked but **not** reserved here; the decrement happens at
    /// [`Transaction::finalize`](crate::Transaction::finalize).
    ///
    /// # Errors
    ///
    /// Rejects inactive products, non-positive quantities, requests beyond
    /// current stock, and bulk requests below the product's minimum
    /// quantity. Note the asymmetry with
    /// [`Product::price_for_quantity`], which clamps instead of rejecting:
    /// cart validation is strict, price quoting is forgiving.
    pub fn new(
        product: &Product,
        quantity: Decimal,
        discount: Rate,
        note: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, SaleError> {
        if !product.is_active() {
            return Err(SaleError::InactiveProduct(product.name().to_string()));
        }
        if quantity <= Decimal::ZERO {
            return Err(SaleError::InvalidQuantity(quantity));
        }

        let units = quantity
            .ceil()
            .to_u32()
            .ok_or(SaleError::InvalidQuantity(quantity))?;
        if product.current_stock() < units {
            return Err(CatalogError::InsufficientStock {
                product: product.name().to_string(),
                available: product.current_stock(),
                requested: units,
            }
            .into());
        }

        if let PricePolicy::Bulk {
            minimum_quantity,
            unit,
            ..
        } = product.policy()
        {
            if quantity < *minimum_quantity {
                return Err(SaleError::BelowBulkMinimum {
                    product: product.name().to_string(),
                    minimum: *minimum_quantity,
                    unit: unit.clone(),
                });
            }
        }

        let unit_price = product.selling_price(today);
        let gross = match product.policy() {
            PricePolicy::Bulk { .. } => product.price_for_quantity(quantity, today),
            _ => unit_price.multiply(quantity),
        };
        let subtotal = gross.multiply(discount.complement());

        Ok(Self {
            product_id: product.id(),
            product_name: product.name().to_string(),
            quantity,
            units,
            unit_price,
            discount,
            gross,
            subtotal,
            note,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn discount(&self) -> Rate {
        self.discount
    }

    /// Pre-discount amount for this line
    pub fn gross(&self) -> Money {
        self.gross
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Discount given away on this line
    pub fn discount_amount(&self) -> Money {
        self.gross - self.subtotal
    }
}
