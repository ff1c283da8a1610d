//! Promotions demo - barcode scanning plus two promotion rules
//!
//! Run: cargo run --example with_promotions

use shared::models::{Product, Promotion};
use std::sync::Arc;
use till::{Basket, ProductCatalog};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Arc::new(ProductCatalog::new(vec![
        Product {
            barcode: 1,
            name: "Beans".to_string(),
            unit_price: 0.65,
            units: None,
        },
        Product {
            barcode: 5,
            name: "Onions".to_string(),
            unit_price: 0.29,
            units: Some("kg".to_string()),
        },
        Product {
            barcode: 6,
            name: "Golden Ale".to_string(),
            unit_price: 2.70,
            units: None,
        },
        Product {
            barcode: 7,
            name: "Pale Ale".to_string(),
            unit_price: 2.55,
            units: None,
        },
        Product {
            barcode: 8,
            name: "Amber Ale".to_string(),
            unit_price: 2.10,
            units: None,
        },
    ]));

    let mut basket = Basket::with_catalog(catalog);
    for barcode in [1, 7, 6, 8, 6, 1, 1] {
        basket.add_item_from_barcode(barcode, 1.0)?;
    }
    basket.add_item_from_barcode(5, 0.2)?;

    let promotions = vec![
        Promotion::m_for_n("Beans 3 for 2", [1], 3, 2),
        Promotion::m_for_n_fixed_price("3 ales for £6", [6, 7, 8, 9], 3, 6.0),
    ];

    println!("{}", basket.generate_invoice(&promotions).to_receipt());
    Ok(())
}
