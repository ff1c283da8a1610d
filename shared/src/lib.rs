//! Shared types for the till workspace
//!
//! Domain models, error types and monetary rounding helpers used by the
//! till crate and its consumers.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{AppError, AppResult};
pub use models::{BasketItem, Discount, Product, Promotion};
pub use serde::{Deserialize, Serialize};
