//! Invoice
//!
//! Read-only view over a basket snapshot and the discounts its
//! promotions produced. Constructed once per checkout; totals accumulate
//! in Decimal so per-line rounding never drifts from the summed totals.

mod renderer;

pub use renderer::ReceiptRenderer;

use crate::pricing::apply_promotions;
use rust_decimal::Decimal;
use shared::models::{BasketItem, Discount, Promotion};
use shared::money::{to_decimal, to_f64};

/// An invoice for a shopping basket
#[derive(Debug, Clone)]
pub struct Invoice {
    basket_items: Vec<BasketItem>,
    discounts: Vec<Discount>,
}

impl Invoice {
    /// Build an invoice from a basket snapshot and a promotion list
    ///
    /// Discounts are computed here, once; the invoice never changes
    /// afterwards.
    pub fn new(basket_items: Vec<BasketItem>, promotions: &[Promotion]) -> Self {
        let discounts = apply_promotions(promotions, &basket_items);
        Self {
            basket_items,
            discounts,
        }
    }

    pub fn basket_items(&self) -> &[BasketItem] {
        &self.basket_items
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Total price of basket items before discounts
    pub fn subtotal(&self) -> f64 {
        let sum: Decimal = self
            .basket_items
            .iter()
            .map(|item| to_decimal(item.line_price()))
            .sum();
        to_f64(sum)
    }

    /// Total of the discount lines (zero or negative)
    pub fn discount_total(&self) -> f64 {
        let sum: Decimal = self
            .discounts
            .iter()
            .map(|discount| to_decimal(discount.line_price()))
            .sum();
        to_f64(sum)
    }

    /// Amount to pay after discounts
    pub fn total(&self) -> f64 {
        to_f64(to_decimal(self.subtotal()) + to_decimal(self.discount_total()))
    }

    /// Render the invoice as a receipt string
    pub fn to_receipt(&self) -> String {
        ReceiptRenderer::new(self).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beans() -> BasketItem {
        BasketItem::new("Beans", 0.65).with_barcode(1)
    }

    #[test]
    fn test_totals_without_promotions() {
        let invoice = Invoice::new(vec![beans(), beans()], &[]);
        assert_eq!(invoice.subtotal(), 1.30);
        assert_eq!(invoice.discount_total(), 0.0);
        assert_eq!(invoice.total(), 1.30);
    }

    #[test]
    fn test_totals_with_m_for_n() {
        // 3 beans at 0.65 on a 3-for-2: pay for two
        let promotions = vec![Promotion::m_for_n("Beans 3 for 2", [1], 3, 2)];
        let invoice = Invoice::new(vec![beans(), beans(), beans()], &promotions);

        assert_eq!(invoice.subtotal(), 1.95);
        assert_eq!(invoice.discount_total(), -0.65);
        assert_eq!(invoice.total(), 1.30);
    }

    #[test]
    fn test_discount_total_sums_all_rules() {
        let promotions = vec![
            Promotion::m_for_n("Beans 3 for 2", [1], 3, 2),
            Promotion::m_for_n_fixed_price("Coke 2 for £1", [4], 2, 1.0),
        ];
        let items = vec![
            beans(),
            beans(),
            beans(),
            BasketItem::new("Coke", 0.70).with_barcode(4),
            BasketItem::new("Coke", 0.70).with_barcode(4),
        ];
        let invoice = Invoice::new(items, &promotions);

        assert_eq!(invoice.discounts().len(), 2);
        assert_eq!(invoice.discount_total(), -1.05);
        assert_eq!(invoice.total(), invoice.subtotal() - 1.05);
    }

    #[test]
    fn test_rounding_happens_per_line_not_on_totals() {
        // Each line rounds up on its own: 1.005 -> 1.01. Summing the raw
        // prices first would give 2.01 instead.
        let items = vec![BasketItem::new("A", 1.005), BasketItem::new("B", 1.005)];
        let invoice = Invoice::new(items, &[]);
        assert_eq!(invoice.subtotal(), 2.02);
    }

    #[test]
    fn test_empty_invoice() {
        let invoice = Invoice::new(vec![], &[]);
        assert_eq!(invoice.subtotal(), 0.0);
        assert_eq!(invoice.total(), 0.0);
    }
}
