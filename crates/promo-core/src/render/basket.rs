use std::collections::HashMap;

use super::{push_line, two_decimals, DETAIL};
use crate::model::{BasketResponse, SummaryAppliedPromotion};

pub const NO_PROMOTIONS_APPLIED: &str = " - No promotions were applied to the basket.";

/// Promotion display names keyed by promotion id, built once per basket.
///
/// When the summary lists the same id more than once the first entry wins.
#[derive(Debug)]
pub struct PromotionNames<'a> {
    by_id: HashMap<i64, &'a str>,
}

impl<'a> PromotionNames<'a> {
    #[must_use]
    pub fn new(applied: &'a [SummaryAppliedPromotion]) -> Self {
        let mut by_id = HashMap::with_capacity(applied.len());
        for promo in applied {
            by_id
                .entry(promo.promotion_id)
                .or_insert(promo.promotion_name.as_str());
        }
        Self { by_id }
    }

    /// Name for `promotion_id`, or an empty string when the summary has no
    /// entry for it.
    #[must_use]
    pub fn resolve(&self, promotion_id: i64) -> &'a str {
        self.by_id.get(&promotion_id).copied().unwrap_or_default()
    }
}

/// Per-line applied promotions, basket totals, and the promotion summary.
#[must_use]
pub fn render_basket(response: &BasketResponse) -> String {
    let applied = &response.summary.applied_promotions;
    let names = PromotionNames::new(applied);
    let mut out = String::new();

    push_line(&mut out, "Basket Response Received.");

    for item in &response.items {
        push_line(
            &mut out,
            &format!(
                " - Line [{}] Promotions Applied: {}",
                item.id,
                item.applied_promotions.len()
            ),
        );
        for line in &item.applied_promotions {
            push_line(
                &mut out,
                &format!(
                    "{DETAIL}{} ({}) - {}",
                    names.resolve(line.promotion_id),
                    line.instance_id,
                    two_decimals(line.discount_amount)
                ),
            );
        }
    }

    push_line(
        &mut out,
        &format!(
            " - Basket total discount: {}",
            two_decimals(response.total_discount)
        ),
    );
    push_line(
        &mut out,
        &format!(
            " - Basket total points: {}",
            two_decimals(response.total_issued_points)
        ),
    );
    let issued = response.coupons.iter().filter(|c| c.issued).count();
    push_line(&mut out, &format!(" - Basket coupons issued: {issued}"));

    if applied.is_empty() {
        push_line(&mut out, NO_PROMOTIONS_APPLIED);
        return out;
    }

    push_line(
        &mut out,
        &format!(" - Total promotions applied: {}", applied.len()),
    );
    for promo in applied {
        push_line(
            &mut out,
            &format!(
                "{DETAIL}{} ({}) - {} - {}",
                promo.promotion_name,
                promo.instance_id,
                two_decimals(promo.discount_amount),
                promo.promotion_type_display
            ),
        );
    }

    out
}

#[cfg(test)]
#[path = "basket_test.rs"]
mod tests;
