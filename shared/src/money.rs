//! Money calculation helpers using rust_decimal for precision
//!
//! All monetary calculations are done using `Decimal` internally, then
//! converted back to `f64` for storage/serialization. Rounding is applied
//! at the point of each line/discount computation, never deferred to
//! totals.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to 2 decimal places (half-up)
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Format a monetary value as a pound-sterling string
///
/// # Examples
///
/// ```
/// use shared::money::format_gbp;
///
/// assert_eq!(format_gbp(12.50), "£12.50");
/// assert_eq!(format_gbp(-0.65), "£-0.65");
/// ```
pub fn format_gbp(value: f64) -> String {
    format!("£{:.2}", value)
}
