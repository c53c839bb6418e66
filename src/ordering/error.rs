//! Error types for order placement.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while placing an order.
///
/// Every variant is an expected outcome of a user request. None of them leaves the
/// ledger or the order log partially updated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The ledger does not hold enough units to fulfill the order.
    #[error("Not enough inventory to fulfill this order: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: ProductId,
        requested: u32,
        available: i64,
    },

    /// The order request itself is malformed (e.g., a zero quantity).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
