//! # Ordering Service
//!
//! Validates and records a single order against the catalog, the ledger and the order log.
//!
//! ## Placement Flow
//!
//! [`OrderingService::place_order`] runs these steps in order and stops at the first failure:
//!
//! 1. Reject a zero quantity with [`OrderError::InvalidArgument`].
//! 2. Sufficiency check against the [`InventoryLedger`]. Failing here yields
//!    [`OrderError::InsufficientInventory`].
//! 3. Catalog lookup. Failing here yields [`OrderError::ProductNotFound`].
//! 4. `total = price × quantity`, checked; an unrepresentable total is an
//!    [`OrderError::InvalidArgument`].
//! 5. Append the order to the [`OrderLog`].
//! 6. Decrement the ledger.
//!
//! Nothing is mutated before step 5, so a rejected order leaves every store untouched.
//!
//! Because the ledger treats unknown products as having zero units, an order for a product
//! that was never added fails at step 2 and is reported as insufficient inventory, not as
//! not found. Only a product that has stock recorded but no catalog entry reaches step 3's
//! error.
//!
//! ## Exclusivity
//!
//! The service holds `&mut` borrows of the ledger and the log for its whole lifetime, so
//! the check in step 2 and the decrement in step 6 cannot be interleaved with another
//! caller's placement.
//!
//! ## Usage
//!
//! ```rust
//! use retail_console::catalog::ProductCatalog;
//! use retail_console::inventory::InventoryLedger;
//! use retail_console::model::{Product, ProductId};
//! use retail_console::order_log::OrderLog;
//! use retail_console::ordering::OrderingService;
//! use rust_decimal::Decimal;
//!
//! let mut catalog = ProductCatalog::new();
//! let mut inventory = InventoryLedger::new();
//! let mut orders = OrderLog::new();
//!
//! catalog.add(Product::new(1, "Widget", Decimal::new(1000, 2))).unwrap();
//! inventory.set(ProductId(1), 5);
//!
//! let order = OrderingService::new(&catalog, &mut inventory, &mut orders)
//!     .place_order(ProductId(1), 3)
//!     .unwrap();
//!
//! assert_eq!(order.total_price, Decimal::new(3000, 2));
//! assert_eq!(inventory.get(ProductId(1)), 2);
//! ```

pub mod error;

pub use error::*;

use crate::catalog::ProductCatalog;
use crate::inventory::InventoryLedger;
use crate::model::{Order, ProductId};
use crate::order_log::OrderLog;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

pub struct OrderingService<'a> {
    catalog: &'a ProductCatalog,
    inventory: &'a mut InventoryLedger,
    orders: &'a mut OrderLog,
}

impl<'a> OrderingService<'a> {
    pub fn new(
        catalog: &'a ProductCatalog,
        inventory: &'a mut InventoryLedger,
        orders: &'a mut OrderLog,
    ) -> Self {
        Self {
            catalog,
            inventory,
            orders,
        }
    }

    #[instrument(skip(self))]
    pub fn place_order(&mut self, product_id: ProductId, quantity: u32) -> Result<Order, OrderError> {
        debug!("place_order called");

        if quantity == 0 {
            warn!("Rejected zero quantity");
            return Err(OrderError::InvalidArgument(
                "quantity must be positive".to_string(),
            ));
        }

        let requested = i64::from(quantity);
        if !self.inventory.has_at_least(product_id, requested) {
            let available = self.inventory.get(product_id);
            warn!(available, "Insufficient inventory");
            return Err(OrderError::InsufficientInventory {
                product_id,
                requested: quantity,
                available,
            });
        }

        let product = self.catalog.find_by_id(product_id).ok_or_else(|| {
            warn!("Product not found");
            OrderError::ProductNotFound(product_id)
        })?;

        let total = product
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| {
                warn!(price = %product.price, "Order total overflowed");
                OrderError::InvalidArgument(format!(
                    "order total for {quantity} x {} is out of range",
                    product.price
                ))
            })?;
        let order = self.orders.append(product_id, quantity, total);
        self.inventory.decrement(product_id, requested);

        info!(order_id = %order.id, total = %order.total_price, "Order placed");
        Ok(order)
    }
}
