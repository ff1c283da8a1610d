//! Shopping basket
//!
//! Items are added manually or by barcode lookup against the catalog.
//! Catalog-miss policy lives here: a missing barcode is logged and
//! skipped, the basket is left unchanged. Scanning without a catalog is
//! a configuration error and fails fast.

use crate::catalog::ProductCatalog;
use crate::invoice::Invoice;
use shared::models::{BasketItem, Promotion};
use shared::{AppError, AppResult};
use std::sync::Arc;

/// Maximum allowed unit price per item (£1,000,000)
const MAX_UNIT_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
const MAX_QUANTITY: f64 = 9999.0;

/// Validate a BasketItem before it enters the basket
fn validate_item(item: &BasketItem) -> AppResult<()> {
    if !item.unit_price.is_finite() || item.unit_price < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "unit_price must be a finite non-negative number, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_UNIT_PRICE {
        return Err(AppError::InvalidAmount(format!(
            "unit_price exceeds maximum allowed ({}), got {}",
            MAX_UNIT_PRICE, item.unit_price
        )));
    }
    if !item.quantity.is_finite() || item.quantity <= 0.0 {
        return Err(AppError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(AppError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    Ok(())
}

/// Keeps track of items in a shopping basket
#[derive(Debug, Clone, Default)]
pub struct Basket {
    catalog: Option<Arc<ProductCatalog>>,
    items: Vec<BasketItem>,
}

impl Basket {
    /// A basket without a catalog; items can only be added manually
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog: Some(catalog),
            items: Vec::new(),
        }
    }

    /// Add an item to the basket
    pub fn add_item(&mut self, item: BasketItem) -> AppResult<()> {
        validate_item(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// Add an item by barcode lookup
    ///
    /// An unknown barcode is logged and skipped; the basket is unchanged.
    /// Fails with [`AppError::CatalogMissing`] if the basket has no catalog.
    pub fn add_item_from_barcode(&mut self, barcode: i64, quantity: f64) -> AppResult<()> {
        let catalog = self.catalog.as_ref().ok_or(AppError::CatalogMissing)?;

        match catalog.get(barcode) {
            Ok(product) => self.add_item(BasketItem::from_product(product, quantity)),
            Err(AppError::ProductNotFound(_)) => {
                tracing::warn!("barcode {} not found in catalog, item not added", barcode);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Snapshot the basket into an invoice with the given promotions
    pub fn generate_invoice(&self, promotions: &[Promotion]) -> Invoice {
        Invoice::new(self.items.clone(), promotions)
    }
}
