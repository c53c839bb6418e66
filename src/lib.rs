//! # Retail Console
//!
//! > **A small, in-memory shop: catalog, inventory, orders and sales figures.**
//!
//! ## 🏗️ Design Philosophy
//!
//! Each store owns exactly one kind of state and exposes direct lookups and updates.
//! The only multi-step logic lives in [`ordering`], which checks the ledger and the
//! catalog before it touches anything, so a rejected order never leaves a store
//! half-updated.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Stores ([`catalog`], [`inventory`], [`order_log`])
//! - [`ProductCatalog`](catalog::ProductCatalog): products in insertion order, price updates.
//! - [`InventoryLedger`](inventory::InventoryLedger): per-product quantities, missing means `0`.
//! - [`OrderLog`](order_log::OrderLog): append-only orders with sequential ids.
//!
//! ### 2. The Services ([`ordering`], [`reporting`])
//! - [`OrderingService`](ordering::OrderingService): validates and records one order.
//! - [`SalesReporter`](reporting::SalesReporter): per-product sales totals.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - [`RetailSystem`](lifecycle::RetailSystem) owns the stores, seeds them and lends them to
//!   the services.
//! - [`setup_tracing`](lifecycle::setup_tracing) initializes logging.
//!
//! ### 4. The Interface ([`console`])
//! The text menu used by the `retail-console` binary.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Error Handling
//! Each component defines its own error type ([`CatalogError`](catalog::CatalogError),
//! [`OrderError`](ordering::OrderError), [`SystemError`](lifecycle::SystemError)). All
//! order failures are expected outcomes and come back as `Err`, never as a panic.
//!
//! ### Money
//! Prices and totals are [`rust_decimal::Decimal`], so sales sums are exact.
//!
//! ### Concurrency Model
//! None. Every operation runs to completion on the caller's thread. Order placement
//! borrows the ledger and the log mutably, so the compiler rules out a second caller
//! interleaving between the sufficiency check and the decrement.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use retail_console::lifecycle::RetailSystem;
//! use retail_console::model::{Product, ProductId};
//! use retail_console::ordering::OrderError;
//! use rust_decimal::Decimal;
//!
//! let mut system = RetailSystem::new();
//! system.catalog_mut().add(Product::new(1, "Widget", Decimal::new(1000, 2))).unwrap();
//! system.inventory_mut().set(ProductId(1), 5);
//!
//! let order = system.ordering().place_order(ProductId(1), 3).unwrap();
//! assert_eq!(order.total_price, Decimal::new(3000, 2));
//!
//! let rejected = system.ordering().place_order(ProductId(1), 3);
//! assert!(matches!(rejected, Err(OrderError::InsufficientInventory { .. })));
//! ```
//!
//! ### Running the Console
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog;
pub mod console;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod order_log;
pub mod ordering;
pub mod reporting;
