//! Product model

use serde::{Deserialize, Serialize};

/// Catalog product entity
///
/// `units` is `None` for per-item products; weighed goods carry a unit
/// label such as "kg".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: i64,
    pub name: String,
    pub unit_price: f64,
    #[serde(default)]
    pub units: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_default_to_per_item() {
        let product: Product =
            serde_json::from_str(r#"{"barcode": 1, "name": "Beans", "unit_price": 0.65}"#)
                .unwrap();
        assert_eq!(product.units, None);
    }

    #[test]
    fn test_weighed_product() {
        let product: Product = serde_json::from_str(
            r#"{"barcode": 5, "name": "Onions", "unit_price": 0.29, "units": "kg"}"#,
        )
        .unwrap();
        assert_eq!(product.units.as_deref(), Some("kg"));
    }
}
