//! # Retail Console
//!
//! Interactive shop console. Seeds the catalog and inventory, then runs the text menu on
//! stdin/stdout until the user exits.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RETAIL_SEED_FILE=shop.json cargo run
//! ```

use retail_console::console::Console;
use retail_console::lifecycle::{setup_tracing, RetailSystem, SystemError};
use std::io;
use tracing::info;

fn main() -> Result<(), SystemError> {
    setup_tracing();

    let mut system = RetailSystem::from_env()?;
    info!(products = system.catalog().len(), "Starting retail console");

    let stdin = io::stdin();
    Console::new(stdin.lock(), io::stdout().lock()).run(&mut system)?;

    info!(orders = system.orders().len(), "Retail console finished");
    Ok(())
}
