//! Promotion rule model
//!
//! Closed set of promotion rules, dispatched by the pricing engine.
//! Rules hold no mutable state and are reusable across invoices.

use crate::models::BasketItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Promotion rule entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "promo_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Promotion {
    /// Buy m items, pay for n. Applies per barcode: items in a group must
    /// be the same product, so the unit price is uniform.
    MForN {
        name: String,
        eligible_barcodes: HashSet<i64>,
        /// Number of items required for a discount
        m: usize,
        /// Number of items that are paid for
        n: usize,
    },
    /// Any m items from the eligible set for a fixed total price. Items
    /// may be distinct products grouped under one promotion.
    MForNFixedPrice {
        name: String,
        eligible_barcodes: HashSet<i64>,
        /// Group size
        m: usize,
        /// Price to pay for m items
        fixed_price: f64,
    },
}

impl Promotion {
    pub fn m_for_n(
        name: impl Into<String>,
        eligible_barcodes: impl IntoIterator<Item = i64>,
        m: usize,
        n: usize,
    ) -> Self {
        Self::MForN {
            name: name.into(),
            eligible_barcodes: eligible_barcodes.into_iter().collect(),
            m,
            n,
        }
    }

    pub fn m_for_n_fixed_price(
        name: impl Into<String>,
        eligible_barcodes: impl IntoIterator<Item = i64>,
        m: usize,
        fixed_price: f64,
    ) -> Self {
        Self::MForNFixedPrice {
            name: name.into(),
            eligible_barcodes: eligible_barcodes.into_iter().collect(),
            m,
            fixed_price,
        }
    }

    /// Rule name, as it appears on the receipt
    pub fn name(&self) -> &str {
        match self {
            Self::MForN { name, .. } | Self::MForNFixedPrice { name, .. } => name,
        }
    }

    pub fn eligible_barcodes(&self) -> &HashSet<i64> {
        match self {
            Self::MForN {
                eligible_barcodes, ..
            }
            | Self::MForNFixedPrice {
                eligible_barcodes, ..
            } => eligible_barcodes,
        }
    }

    /// Filter a basket for the items this rule applies to
    ///
    /// Manually entered items without a barcode are never eligible.
    pub fn eligible_items<'a>(&self, items: &'a [BasketItem]) -> Vec<&'a BasketItem> {
        items
            .iter()
            .filter(|item| {
                item.barcode
                    .is_some_and(|barcode| self.eligible_barcodes().contains(&barcode))
            })
            .collect()
    }
}
