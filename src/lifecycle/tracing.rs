//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the crate/module prefix hidden (`with_target(false)`)
//! - **stderr output** so log lines never interleave with the menu on stdout
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only warnings (rejected orders, invalid prices)
//! RUST_LOG=warn cargo run
//!
//! # State changes: products added, inventory set, orders placed
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry
//! RUST_LOG=debug cargo run
//!
//! # Filter to a single component
//! RUST_LOG=retail_console::ordering=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order for three units of product 1 with `RUST_LOG=info`:
//!
//! ```text
//! INFO place_order:append: Order recorded product_id=1 quantity=3 total_price=2999.97 order_id=1 size=1
//! INFO place_order: Order placed product_id=1 quantity=3 order_id=1 total=2999.97
//! ```
//!
//! A rejected order only produces a `WARN` line inside the `place_order` span; the
//! `append` span never opens.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
