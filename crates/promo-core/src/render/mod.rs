//! Report text for every response shape.
//!
//! All functions here are pure: they read a model value and return a new
//! `String`. Monetary amounts, points and percentages are always written
//! with two decimals, rounding midpoints away from zero. Quantities keep
//! the decimal's own scale.

mod basket;
mod coupon;
mod import;
mod missed;
mod promotions;
mod summary;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

pub use basket::{render_basket, PromotionNames, NO_PROMOTIONS_APPLIED};
pub use coupon::{
    render_coupon_codes_export, render_coupon_codes_import, render_validated_coupon,
    COUPON_CODES_EXPORTED, COUPON_CODES_IMPORTED,
};
pub use import::{render_product_import, IMPORT_QUEUED_CODE, IMPORT_QUEUED_HINT};
pub use missed::{render_missed_promotions, NO_MISSED_PROMOTIONS};
pub use promotions::render_promotion_details;
pub use summary::{messages_text, render_error, ERROR_PREFIX};

/// Indent for detail lines nested under a ` - ` heading.
const DETAIL: &str = "            -> ";

/// Formats a money, points or percentage value with exactly two decimals.
#[must_use]
pub fn two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals_pads_whole_numbers() {
        assert_eq!(two_decimals(Decimal::from(10)), "10.00");
        assert_eq!(two_decimals(Decimal::ZERO), "0.00");
    }

    #[test]
    fn two_decimals_rounds_midpoint_away_from_zero() {
        assert_eq!(two_decimals(Decimal::new(10_005, 3)), "10.01");
        assert_eq!(two_decimals(Decimal::new(-10_005, 3)), "-10.01");
        assert_eq!(two_decimals(Decimal::new(10_004, 3)), "10.00");
    }

    #[test]
    fn timestamp_uses_iso_like_layout() {
        let value = NaiveDateTime::parse_from_str("2026-10-17T09:05:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        assert_eq!(timestamp(value), "2026-10-17 09:05:00");
    }
}
