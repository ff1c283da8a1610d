//! Basket item and discount models
//!
//! A `BasketItem` is one priced entry in a basket. A `Discount` has the
//! same shape but a negative line price; it is produced by the pricing
//! engine and only ever appears on an invoice's discount list.

use crate::models::Product;
use crate::money::round_money;
use serde::{Deserialize, Serialize};

/// One priced entry in a shopping basket
///
/// Value type: never mutated after construction. `quantity` defaults to
/// 1.0; `units` is `None` for per-item products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    pub name: String,
    pub unit_price: f64,
    pub barcode: Option<i64>,
    /// Unit label for weighed goods, e.g. "kg"
    pub units: Option<String>,
    pub quantity: f64,
}

impl BasketItem {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            barcode: None,
            units: None,
            quantity: 1.0,
        }
    }

    /// Build an item from a catalog product
    pub fn from_product(product: &Product, quantity: f64) -> Self {
        Self {
            name: product.name.clone(),
            unit_price: product.unit_price,
            barcode: Some(product.barcode),
            units: product.units.clone(),
            quantity,
        }
    }

    pub fn with_barcode(mut self, barcode: i64) -> Self {
        self.barcode = Some(barcode);
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Line price: `unit_price * quantity`, rounded to 2 dp half-up
    pub fn line_price(&self) -> f64 {
        round_money(self.unit_price * self.quantity)
    }

    /// Receipt description
    ///
    /// One line for per-item products; weighed goods get a second
    /// `"<quantity><units> @ £<rate>/<units>"` detail line.
    pub fn description(&self) -> String {
        let mut desc = self.name.clone();
        if let Some(units) = &self.units {
            desc.push('\n');
            desc.push_str(&format!(
                "{}{} @ £{}/{}",
                self.quantity, units, self.unit_price, units
            ));
        }
        desc
    }
}

/// A deduction produced by a promotion rule
///
/// Same shape as [`BasketItem`], but its line price is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub name: String,
    pub unit_price: f64,
    pub barcode: Option<i64>,
    pub units: Option<String>,
    pub quantity: f64,
}

impl Discount {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            unit_price: amount,
            barcode: None,
            units: None,
            quantity: 1.0,
        }
    }

    /// Line price: negated `unit_price * quantity`, rounded to 2 dp half-up
    pub fn line_price(&self) -> f64 {
        -round_money(self.unit_price * self.quantity)
    }
}
