use crate::model::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated sales figures for a single product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: Decimal,
    pub quantity_sold: u64,
}

/// Per-product sales figures, keyed by product id.
pub type SalesReport = BTreeMap<ProductId, SalesSummary>;
