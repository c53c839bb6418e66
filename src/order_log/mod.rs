//! # Order Log
//!
//! Append-only history of placed orders.
//!
//! The log owns the order id counter. Ids start at `1` and advance by one on every
//! successful [`OrderLog::append`]; rejected orders never reach the log, so they never
//! consume an id.

use crate::model::{Order, OrderId, ProductId};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct OrderLog {
    orders: Vec<Order>,
    next_id: u32,
}

impl Default for OrderLog {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new order stamped with the current time and returns it.
    #[instrument(skip(self))]
    pub fn append(&mut self, product_id: ProductId, quantity: u32, total_price: Decimal) -> Order {
        let order = Order {
            id: OrderId(self.next_id),
            product_id,
            quantity,
            total_price,
            placed_at: Utc::now(),
        };
        self.next_id += 1;
        self.orders.push(order.clone());
        info!(order_id = %order.id, size = self.orders.len(), "Order recorded");
        order
    }

    /// Copy of every order in append order.
    pub fn all(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// The id the next appended order will receive.
    pub fn next_id(&self) -> OrderId {
        OrderId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
