//! Pure data structures shared by the catalog, ledger, order log and reporter.

pub mod order;
pub mod product;
pub mod report;

pub use order::*;
pub use product::*;
pub use report::*;
