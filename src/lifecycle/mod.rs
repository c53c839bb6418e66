//! # System Lifecycle
//!
//! This module brings the shop up: it owns the stores, seeds them, and wires them into
//! the services that operate on them.
//!
//! **Key Responsibilities:**
//! 1. **Store Ownership** - [`RetailSystem`] owns the catalog, the ledger and the order log
//! 2. **Seeding** - [`SeedData`] supplies the starting products and inventory levels
//! 3. **Dependency Wiring** - [`RetailSystem::ordering`] and [`RetailSystem::reporter`]
//!    lend the stores to the services for the duration of one call
//! 4. **Observability Setup** - [`setup_tracing`] initializes logging
//!
//! ## Configuration
//!
//! | Variable           | Effect                                                  |
//! |--------------------|---------------------------------------------------------|
//! | `RUST_LOG`         | Log filter, see [`tracing`](self::tracing)              |
//! | `RETAIL_SEED_FILE` | JSON seed file read once at startup instead of defaults |
//!
//! The seed file is only read, never written; all state is lost when the process exits.

pub mod retail_system;
pub mod seed;
pub mod tracing;

pub use retail_system::*;
pub use seed::*;
pub use self::tracing::*;
