//! Error types for sales reporting.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while aggregating the order log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    /// A product's accumulated sales no longer fit in a decimal.
    #[error("Sales total overflowed for product {0}")]
    SalesOverflow(ProductId),
}
