//! Unified error type for the till workspace
//!
//! Covers catalog lookup, catalog loading and basket input validation.
//! The pricing engine itself is total and never returns an error for
//! structurally valid input.

use thiserror::Error;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Barcode was not present in the product catalog
    #[error("barcode {0} not found in catalog")]
    ProductNotFound(i64),

    /// Barcode-based add was attempted on a basket with no catalog
    #[error("cannot add by barcode without a catalog")]
    CatalogMissing,

    /// Monetary amount was negative or not finite
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Quantity was zero, negative or not finite
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Catalog file could not be read
    #[error("failed to read catalog file: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Catalog file could not be parsed
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

/// Convenience result alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ProductNotFound(999);
        assert_eq!(err.to_string(), "barcode 999 not found in catalog");

        let err = AppError::CatalogMissing;
        assert_eq!(err.to_string(), "cannot add by barcode without a catalog");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::CatalogIo(_)));
    }
}
