//! # Inventory Ledger
//!
//! Per-product available quantities.
//!
//! The ledger is a plain arithmetic store: a product with no entry has quantity `0`, and
//! neither [`InventoryLedger::set`] nor [`InventoryLedger::decrement`] enforces
//! non-negativity. Callers are expected to run [`InventoryLedger::has_at_least`] before
//! decrementing; the [`OrderingService`](crate::ordering::OrderingService) does exactly that.

use crate::model::ProductId;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    quantities: BTreeMap<ProductId, i64>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored quantity for a product.
    #[instrument(skip(self))]
    pub fn set(&mut self, product_id: ProductId, quantity: i64) {
        self.quantities.insert(product_id, quantity);
        info!(size = self.quantities.len(), "Inventory set");
    }

    /// Stored quantity, or `0` when the product has no entry.
    pub fn get(&self, product_id: ProductId) -> i64 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    pub fn has_at_least(&self, product_id: ProductId, quantity: i64) -> bool {
        self.get(product_id) >= quantity
    }

    /// Subtracts `quantity` from the stored value. The result may be negative and
    /// saturates at the bounds of `i64`.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, product_id: ProductId, quantity: i64) {
        let remaining = self.get(product_id).saturating_sub(quantity);
        self.quantities.insert(product_id, remaining);
        debug!(remaining, "Inventory decremented");
    }

    /// Snapshot of every recorded entry, ordered by product id.
    pub fn all_entries(&self) -> BTreeMap<ProductId, i64> {
        self.quantities.clone()
    }
}
