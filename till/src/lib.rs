//! Till - point-of-sale shopping basket
//!
//! # Module structure
//!
//! ```text
//! till/src/
//! ├── catalog.rs     # Barcode -> product lookup
//! ├── basket.rs      # Item entry, barcode scanning
//! ├── pricing/       # Promotion engine (discount calculation)
//! ├── invoice/       # Invoice totals and receipt rendering
//! └── utils/         # Text layout helpers
//! ```
//!
//! The flow: a [`Basket`] collects [`shared::BasketItem`]s (manually or via
//! a [`ProductCatalog`] lookup), [`Basket::generate_invoice`] snapshots them
//! into an [`Invoice`], the pricing engine turns the configured
//! [`shared::Promotion`] list into discounts, and the invoice renders a
//! receipt string.

pub mod basket;
pub mod catalog;
pub mod invoice;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use basket::Basket;
pub use catalog::ProductCatalog;
pub use invoice::{Invoice, ReceiptRenderer};
pub use pricing::apply_promotions;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult};
