//! Product catalog with in-memory lookup
//!
//! Products are indexed by barcode. The catalog is read-only once built
//! and is shared behind an `Arc` by baskets that scan items.

use shared::models::Product;
use shared::{AppError, AppResult};
use std::collections::HashMap;
use std::path::Path;

/// Barcode-indexed product catalog
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<i64, Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.barcode, product))
                .collect(),
        }
    }

    /// Load a catalog from a JSON file
    ///
    /// The file must contain an array of products, each with `barcode`,
    /// `name` and `unit_price` keys; `units` is optional.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&contents)?;
        Ok(Self::new(products))
    }

    /// Look up a product by barcode
    pub fn get(&self, barcode: i64) -> AppResult<&Product> {
        self.products
            .get(&barcode)
            .ok_or(AppError::ProductNotFound(barcode))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
