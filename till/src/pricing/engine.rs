//! Promotion engine - applies promotion rules to basket items
//!
//! Each rule is evaluated independently against the original,
//! undiscounted basket: rules do not interact and may overlap in eligible
//! items. Output discounts are concatenated in rule-list order.

use super::rules;
use shared::models::{BasketItem, Discount, Promotion};

/// Apply an ordered list of promotion rules to a basket
///
/// Pure and total: the basket is never mutated, and structurally valid
/// input (including an empty basket or rule list) always yields a
/// discount list, possibly empty.
pub fn apply_promotions(promotions: &[Promotion], items: &[BasketItem]) -> Vec<Discount> {
    let mut discounts = Vec::new();

    for promotion in promotions {
        let eligible = promotion.eligible_items(items);
        match promotion {
            Promotion::MForN { name, m, n, .. } => {
                discounts.extend(rules::m_for_n_discounts(name, *m, *n, &eligible));
            }
            Promotion::MForNFixedPrice {
                name,
                m,
                fixed_price,
                ..
            } => {
                discounts.extend(rules::fixed_price_discounts(name, *m, *fixed_price, eligible));
            }
        }
    }

    discounts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beans() -> BasketItem {
        BasketItem::new("Beans", 0.65).with_barcode(1)
    }

    fn coke() -> BasketItem {
        BasketItem::new("Coke", 0.70).with_barcode(4)
    }

    #[test]
    fn test_empty_rule_list_yields_no_discounts() {
        let items = vec![beans(), beans(), beans()];
        assert!(apply_promotions(&[], &items).is_empty());
    }

    #[test]
    fn test_empty_basket_yields_no_discounts() {
        let promotions = vec![Promotion::m_for_n("Beans 3 for 2", [1], 3, 2)];
        assert!(apply_promotions(&promotions, &[]).is_empty());
    }

    #[test]
    fn test_non_matching_barcodes_yield_no_discounts() {
        let promotions = vec![Promotion::m_for_n("Bread 3 for 2", [2], 3, 2)];
        let items = vec![beans(), beans(), beans()];
        assert!(apply_promotions(&promotions, &items).is_empty());
    }

    #[test]
    fn test_discounts_follow_rule_list_order() {
        let promotions = vec![
            Promotion::m_for_n_fixed_price("Coke 2 for £1", [4], 2, 1.0),
            Promotion::m_for_n("Beans 3 for 2", [1], 3, 2),
        ];
        let items = vec![beans(), coke(), beans(), coke(), beans()];

        let discounts = apply_promotions(&promotions, &items);
        let names: Vec<&str> = discounts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Coke 2 for £1", "Beans 3 for 2"]);
    }

    #[test]
    fn test_overlapping_rules_both_fire() {
        // No mutual exclusion: the same items satisfy both rules
        let promotions = vec![
            Promotion::m_for_n("Beans 3 for 2", [1], 3, 2),
            Promotion::m_for_n_fixed_price("Any 3 for £1.50", [1, 4], 3, 1.50),
        ];
        let items = vec![beans(), beans(), beans()];

        let discounts = apply_promotions(&promotions, &items);
        assert_eq!(discounts.len(), 2);
    }

    #[test]
    fn test_basket_is_not_mutated() {
        let promotions = vec![Promotion::m_for_n("Beans 3 for 2", [1], 3, 2)];
        let items = vec![beans(), beans(), beans(), coke()];
        let before = items.clone();

        apply_promotions(&promotions, &items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let promotions = vec![
            Promotion::m_for_n("Beans 3 for 2", [1], 3, 2),
            Promotion::m_for_n_fixed_price("Coke 2 for £1", [4], 2, 1.0),
        ];
        let items = vec![beans(), beans(), beans(), coke(), coke()];

        let first = apply_promotions(&promotions, &items);
        let second = apply_promotions(&promotions, &items);
        assert_eq!(first, second);
    }
}
