use crate::catalog::{CatalogError, ProductCatalog};
use crate::inventory::InventoryLedger;
use crate::lifecycle::seed::{SeedData, SEED_FILE_ENV};
use crate::order_log::OrderLog;
use crate::ordering::OrderingService;
use crate::reporting::SalesReporter;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while bringing the system up.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Seed product rejected: {0}")]
    Catalog(#[from] CatalogError),
}

/// Owner of every store in the shop.
///
/// `RetailSystem` is responsible for:
/// - **Seeding**: Loading the starting catalog and inventory levels
/// - **Dependency Wiring**: Handing the stores to [`OrderingService`] and [`SalesReporter`]
///
/// # Example
///
/// ```rust
/// use retail_console::lifecycle::{RetailSystem, SeedData};
/// use retail_console::model::ProductId;
///
/// let mut system = RetailSystem::seeded(&SeedData::default()).unwrap();
///
/// let order = system.ordering().place_order(ProductId(2), 2).unwrap();
/// assert_eq!(system.inventory().get(ProductId(2)), 18);
///
/// let report = system.reporter().summarize().unwrap();
/// assert_eq!(report[&ProductId(2)].total_sales, order.total_price);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetailSystem {
    catalog: ProductCatalog,
    inventory: InventoryLedger,
    orders: OrderLog,
}

impl RetailSystem {
    /// Creates a system with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system and loads every seed product into the catalog and the ledger.
    ///
    /// # Errors
    /// Fails with [`SystemError::Catalog`] if a seed product has a price the catalog rejects.
    #[instrument(skip(seed), fields(products = seed.products.len()))]
    pub fn seeded(seed: &SeedData) -> Result<Self, SystemError> {
        let mut system = Self::new();
        for entry in &seed.products {
            system.catalog.add(entry.product())?;
            system.inventory.set(entry.id, entry.quantity);
        }
        info!(catalog_size = system.catalog.len(), "System seeded");
        Ok(system)
    }

    /// Seeds from the JSON file named by `RETAIL_SEED_FILE`, or from the default shop when
    /// the variable is unset.
    pub fn from_env() -> Result<Self, SystemError> {
        match std::env::var_os(SEED_FILE_ENV) {
            Some(path) => Self::from_seed_file(path),
            None => Self::seeded(&SeedData::default()),
        }
    }

    /// Seeds from a JSON seed file.
    ///
    /// # Errors
    /// [`SystemError::Io`] if the file cannot be read, [`SystemError::Seed`] if it is not
    /// valid seed JSON, [`SystemError::Catalog`] if a product is rejected.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading seed file");
        let seed = SeedData::from_json(&std::fs::read_to_string(path)?)?;
        Self::seeded(&seed)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.catalog
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryLedger {
        &mut self.inventory
    }

    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    /// Borrows the stores for order placement.
    pub fn ordering(&mut self) -> OrderingService<'_> {
        OrderingService::new(&self.catalog, &mut self.inventory, &mut self.orders)
    }

    pub fn reporter(&self) -> SalesReporter<'_> {
        SalesReporter::new(&self.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::seed::SeedProduct;
    use crate::model::ProductId;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WIDGET_SEED: &str =
        r#"{"products": [{"id": 1, "name": "Widget", "price": "10.00", "quantity": 5}]}"#;

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_seeded_loads_catalog_and_inventory() {
        let system = RetailSystem::seeded(&SeedData::default()).unwrap();

        assert_eq!(system.catalog().len(), 3);
        assert_eq!(system.catalog().find_by_id(ProductId(1)).unwrap().name, "Laptop");
        assert_eq!(system.inventory().get(ProductId(1)), 10);
        assert_eq!(system.inventory().get(ProductId(2)), 20);
        assert_eq!(system.inventory().get(ProductId(3)), 15);
        assert!(system.orders().is_empty());
    }

    #[test]
    fn test_seed_with_negative_price_fails() {
        let seed = SeedData {
            products: vec![SeedProduct {
                id: ProductId(1),
                name: "Broken".to_string(),
                price: dec!(-1),
                quantity: 1,
            }],
        };

        let result = RetailSystem::seeded(&seed);
        assert!(matches!(result, Err(SystemError::Catalog(_))));
    }

    #[test]
    fn test_from_seed_file_loads_products() {
        let file = seed_file(WIDGET_SEED);

        let system = RetailSystem::from_seed_file(file.path()).unwrap();

        assert_eq!(system.catalog().len(), 1);
        assert_eq!(system.catalog().find_by_id(ProductId(1)).unwrap().price, dec!(10.00));
        assert_eq!(system.inventory().get(ProductId(1)), 5);
    }

    #[test]
    fn test_from_seed_file_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = RetailSystem::from_seed_file(dir.path().join("missing.json"));

        assert!(matches!(result, Err(SystemError::Io(_))));
    }

    #[test]
    fn test_from_seed_file_bad_json_is_seed_error() {
        let file = seed_file(r#"{"products": [{"id": "one"}]}"#);

        let result = RetailSystem::from_seed_file(file.path());

        assert!(matches!(result, Err(SystemError::Seed(_))));
    }

    #[test]
    fn test_from_seed_file_rejected_price_is_catalog_error() {
        let file = seed_file(
            r#"{"products": [{"id": 1, "name": "Broken", "price": "-2", "quantity": 1}]}"#,
        );

        let result = RetailSystem::from_seed_file(file.path());

        assert!(matches!(result, Err(SystemError::Catalog(_))));
    }

    // The only test that touches the seed variable, so no other test observes it.
    #[test]
    fn test_from_env_follows_seed_variable() {
        let file = seed_file(WIDGET_SEED);

        std::env::set_var(SEED_FILE_ENV, file.path());
        let from_file = RetailSystem::from_env();
        std::env::set_var(SEED_FILE_ENV, file.path().with_extension("missing"));
        let from_missing = RetailSystem::from_env();
        std::env::remove_var(SEED_FILE_ENV);
        let from_default = RetailSystem::from_env();

        let from_file = from_file.unwrap();
        assert_eq!(from_file.catalog().find_by_id(ProductId(1)).unwrap().name, "Widget");
        assert!(matches!(from_missing, Err(SystemError::Io(_))));
        assert_eq!(from_default.unwrap().catalog().len(), 3);
    }
}
