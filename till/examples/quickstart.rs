//! Quickstart - manual basket without a catalog
//!
//! Run: cargo run --example quickstart

use shared::models::BasketItem;
use till::Basket;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut basket = Basket::new();

    // Items have names and prices
    basket.add_item(BasketItem::new("Beans", 0.65))?;
    basket.add_item(BasketItem::new("Coke", 0.70))?;

    // Weighed goods carry units and a quantity
    basket.add_item(
        BasketItem::new("Onions", 0.50)
            .with_units("kg")
            .with_quantity(0.5),
    )?;

    println!("{}", basket.generate_invoice(&[]).to_receipt());
    Ok(())
}
