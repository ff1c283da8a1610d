//! Per-rule discount calculation
//!
//! Pure functions from the eligible slice of a basket to discount lines.
//! Uses rust_decimal for precise arithmetic; every amount is rounded
//! half-up at 2 dp at the point of computation.

use rust_decimal::Decimal;
use shared::models::{BasketItem, Discount};
use shared::money::{to_decimal, to_f64};

/// "Buy m, pay for n" discounts
///
/// Eligible items are partitioned by barcode (a group must be one
/// product, so the unit price is uniform). Each full group of m yields
/// one discount of `unit_price * (m - n)`; leftover items get nothing.
/// `m <= n` is not rejected: the non-positive amount passes through.
pub(crate) fn m_for_n_discounts(
    name: &str,
    m: usize,
    n: usize,
    eligible: &[&BasketItem],
) -> Vec<Discount> {
    if m == 0 {
        return Vec::new();
    }

    // (barcode, unit_price, count) in first-seen order
    let mut counts: Vec<(i64, f64, usize)> = Vec::new();
    for item in eligible {
        let Some(barcode) = item.barcode else {
            continue;
        };
        match counts.iter_mut().find(|entry| entry.0 == barcode) {
            Some(entry) => entry.2 += 1,
            None => counts.push((barcode, item.unit_price, 1)),
        }
    }

    let free_items = m as i64 - n as i64;
    let mut discounts = Vec::new();
    for (_, unit_price, count) in counts {
        let amount = to_f64(to_decimal(unit_price) * Decimal::from(free_items));
        for _ in 0..count / m {
            discounts.push(Discount::new(name, amount));
        }
    }
    discounts
}

/// "m items for a fixed price" discounts
///
/// Eligible items are sorted by descending line price (stable, so ties
/// keep basket order) and chunked into groups of m: the most expensive
/// items are discounted first. A trailing short chunk does not qualify,
/// and a chunk whose subtotal does not beat the fixed price is dropped
/// rather than emitted as a zero or negative saving.
pub(crate) fn fixed_price_discounts(
    name: &str,
    m: usize,
    fixed_price: f64,
    mut eligible: Vec<&BasketItem>,
) -> Vec<Discount> {
    if m == 0 {
        return Vec::new();
    }

    eligible.sort_by(|a, b| b.line_price().total_cmp(&a.line_price()));

    let mut discounts = Vec::new();
    for chunk in eligible.chunks(m) {
        if chunk.len() < m {
            break;
        }
        let subtotal: Decimal = chunk.iter().map(|item| to_decimal(item.line_price())).sum();
        let amount = to_f64(subtotal - to_decimal(fixed_price));
        if amount > 0.0 {
            discounts.push(Discount::new(name, amount));
        }
    }
    discounts
}
