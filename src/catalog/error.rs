//! Error types for the product catalog.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The supplied value is outside the accepted range (e.g., a negative price).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
