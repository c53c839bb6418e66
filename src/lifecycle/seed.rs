//! Startup data for the catalog and the ledger.

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON seed file.
pub const SEED_FILE_ENV: &str = "RETAIL_SEED_FILE";

/// One seeded product together with its starting inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl SeedProduct {
    pub fn product(&self) -> Product {
        Product::new(self.id, self.name.clone(), self.price)
    }
}

/// Products and inventory levels loaded at startup.
///
/// The default is the reference shop: a laptop, a smartphone and a tablet.
///
/// ```json
/// {"products": [{"id": 1, "name": "Laptop", "price": "999.99", "quantity": 10}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub products: Vec<SeedProduct>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let seed = |id: u32, name: &str, cents: i64, quantity: i64| SeedProduct {
            id: ProductId(id),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            quantity,
        };
        Self {
            products: vec![
                seed(1, "Laptop", 99999, 10),
                seed(2, "Smartphone", 59999, 20),
                seed(3, "Tablet", 29999, 15),
            ],
        }
    }
}
