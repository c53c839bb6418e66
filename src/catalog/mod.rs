//! # Product Catalog
//!
//! The authoritative set of sellable products.
//!
//! ## Overview
//!
//! Products keep their insertion order and are looked up with a linear scan, which is
//! plenty for a shop-sized catalog. The catalog does not check id uniqueness on
//! [`ProductCatalog::add`]; when two products share an id, lookups return the first one.
//!
//! Prices are the only mutable field. A price outside `0..=`[`MAX_PRICE`] is rejected with
//! [`CatalogError::InvalidArgument`] both when a product is added and when its price is
//! updated. The upper bound keeps `price × quantity` for any `u32` quantity well inside
//! the range of [`Decimal`]. Updating the price of an unknown product is a silent no-op.
//!
//! ## Usage
//!
//! ```rust
//! use retail_console::catalog::ProductCatalog;
//! use retail_console::model::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! let mut catalog = ProductCatalog::new();
//! catalog.add(Product::new(1, "Widget", Decimal::new(1000, 2))).unwrap();
//!
//! assert!(catalog.update_price(ProductId(1), Decimal::new(1250, 2)).unwrap());
//! assert_eq!(catalog.find_by_id(ProductId(1)).unwrap().price, Decimal::new(1250, 2));
//! ```

pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

/// Highest accepted unit price: one trillion.
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product to the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidArgument`] if the product's price is negative or above
    /// [`MAX_PRICE`].
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        debug!(?product, "add called");
        validate_price(product.price)?;
        self.products.push(product);
        info!(size = self.products.len(), "Product added");
        Ok(())
    }

    /// Returns the first product with the given id.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Sets the price of a product.
    ///
    /// Returns `Ok(false)` without touching anything when no product has this id.
    #[instrument(skip(self))]
    pub fn update_price(&mut self, id: ProductId, new_price: Decimal) -> Result<bool, CatalogError> {
        validate_price(new_price)?;
        match self.products.iter_mut().find(|product| product.id == id) {
            Some(product) => {
                product.price = new_price;
                info!("Price updated");
                Ok(true)
            }
            None => {
                debug!("Unknown product, price update ignored");
                Ok(false)
            }
        }
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate_price(price: Decimal) -> Result<(), CatalogError> {
    if price < Decimal::ZERO {
        warn!(%price, "Rejected negative price");
        return Err(CatalogError::InvalidArgument(format!(
            "price must not be negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        warn!(%price, "Rejected oversized price");
        return Err(CatalogError::InvalidArgument(format!(
            "price must not exceed {MAX_PRICE}, got {price}"
        )));
    }
    Ok(())
}
