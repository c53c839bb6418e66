//! Per-product sales aggregation over the order log.
//!
//! Sums are exact. A sum that leaves the range of [`Decimal`](rust_decimal::Decimal)
//! is reported as [`ReportError::SalesOverflow`] rather than wrapped or saturated.

pub mod error;

pub use error::*;

use crate::model::{SalesReport, SalesSummary};
use crate::order_log::OrderLog;
use tracing::{debug, instrument, warn};

pub struct SalesReporter<'a> {
    orders: &'a OrderLog,
}

impl<'a> SalesReporter<'a> {
    pub fn new(orders: &'a OrderLog) -> Self {
        Self { orders }
    }

    /// Sums `total_price` and `quantity` for every product that has at least one order.
    #[instrument(skip(self))]
    pub fn summarize(&self) -> Result<SalesReport, ReportError> {
        let mut report = SalesReport::new();
        for order in self.orders.all() {
            let summary: &mut SalesSummary = report.entry(order.product_id).or_default();
            summary.total_sales = summary
                .total_sales
                .checked_add(order.total_price)
                .ok_or_else(|| {
                    warn!(product_id = %order.product_id, "Sales total overflowed");
                    ReportError::SalesOverflow(order.product_id)
                })?;
            summary.quantity_sold += u64::from(order.quantity);
        }
        debug!(products = report.len(), "Sales summarized");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_log_yields_empty_report() {
        let log = OrderLog::new();
        assert!(SalesReporter::new(&log).summarize().unwrap().is_empty());
    }

    #[test]
    fn test_orders_for_same_product_are_summed() {
        let mut log = OrderLog::new();
        log.append(ProductId(1), 2, dec!(20.00));
        log.append(ProductId(1), 3, dec!(30.00));

        let report = SalesReporter::new(&log).summarize().unwrap();

        assert_eq!(
            report.get(&ProductId(1)),
            Some(&SalesSummary {
                total_sales: dec!(50.00),
                quantity_sold: 5,
            })
        );
    }

    #[test]
    fn test_products_are_kept_apart() {
        let mut log = OrderLog::new();
        log.append(ProductId(1), 1, dec!(999.99));
        log.append(ProductId(2), 2, dec!(1199.98));
        log.append(ProductId(1), 1, dec!(999.99));

        let report = SalesReporter::new(&log).summarize().unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[&ProductId(1)].total_sales, dec!(1999.98));
        assert_eq!(report[&ProductId(1)].quantity_sold, 2);
        assert_eq!(report[&ProductId(2)].total_sales, dec!(1199.98));
        assert_eq!(report[&ProductId(2)].quantity_sold, 2);
    }

    #[test]
    fn test_sales_overflow_is_an_error() {
        use rust_decimal::Decimal;

        let mut log = OrderLog::new();
        log.append(ProductId(1), 1, Decimal::MAX);
        log.append(ProductId(2), 1, dec!(1.00));
        log.append(ProductId(1), 1, Decimal::MAX);

        let result = SalesReporter::new(&log).summarize();

        assert_eq!(result, Err(ReportError::SalesOverflow(ProductId(1))));
    }
}
