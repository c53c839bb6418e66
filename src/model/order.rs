//! Represents a placed order.
//!
//! Orders are created only by [`OrderLog::append`](crate::order_log::OrderLog::append)
//! and are never mutated afterwards. `total_price` is a snapshot of
//! unit price × quantity taken when the order was placed.

use crate::model::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order{{id={}, productId={}, quantity={}, totalPrice={:.2}, orderTime={}}}",
            self.id,
            self.product_id,
            self.quantity,
            self.total_price,
            self.placed_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
