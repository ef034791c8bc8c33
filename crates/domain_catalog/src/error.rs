//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product already exists: {0}")]
    DuplicateProduct(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Stock quantity must be positive")]
    InvalidQuantity,

    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },
}
