use rust_decimal::Decimal;

use super::{push_line, two_decimals, DETAIL};
use crate::model::{
    ActionDetails, BasketResponse, CriteriaGroup, CriteriaItem, CriteriaTarget, MissedPromotion,
    MissedPromotionAction,
};

pub const NO_MISSED_PROMOTIONS: &str = "There are no missed promotions for the submitted basket.";

const CRITERIA_ITEM: &str = "               -- ";

/// Section listing each missed promotion with what the basket lacks.
///
/// Starts with a blank line so it can be appended directly to
/// [`super::render_basket`] output.
#[must_use]
pub fn render_missed_promotions(response: &BasketResponse) -> String {
    let mut out = String::from("\n");
    push_line(&mut out, "Missed Promotions");

    if response.missed_promotions.is_empty() {
        push_line(&mut out, NO_MISSED_PROMOTIONS);
        return out;
    }

    for missed in &response.missed_promotions {
        render_missed_promotion(&mut out, missed);
    }
    out
}

fn render_missed_promotion(out: &mut String, missed: &MissedPromotion) {
    push_line(
        out,
        &format!(
            " - Missed Promotion [{}, {}, {}]",
            missed.category, missed.promotion_type_display, missed.promotion_name
        ),
    );

    let criteria = &missed.criteria;
    if criteria.basket_additional_spend > Decimal::ZERO {
        push_line(
            out,
            &format!(
                "{DETAIL}Basket Additional Spend: {}",
                two_decimals(criteria.basket_additional_spend)
            ),
        );
    }
    if criteria.total_additional_spend > Decimal::ZERO {
        push_line(
            out,
            &format!(
                "{DETAIL}Total Additional Spend: {}",
                two_decimals(criteria.total_additional_spend)
            ),
        );
    }

    for group in &criteria.criteria_items {
        render_criteria_group(out, group);
    }

    push_line(out, &action_line(&missed.action));
}

fn render_criteria_group(out: &mut String, group: &CriteriaGroup) {
    // Quantity and spend fragments are deliberately run together.
    let quantity = if group.additional_quantity > Decimal::ZERO {
        format!("Additional Qty: {}", group.additional_quantity)
    } else {
        String::new()
    };
    let spend = if group.additional_spend > Decimal::ZERO {
        format!("Additional Spend: {}", two_decimals(group.additional_spend))
    } else {
        String::new()
    };

    push_line(
        out,
        &format!(
            "{DETAIL}{}, {quantity}{spend}, Only Matched Items: {}",
            group.source, group.only_matched_items
        ),
    );

    for item in &group.items {
        push_line(out, &criteria_item_line(item));
    }
}

fn criteria_item_line(item: &CriteriaItem) -> String {
    let (first, second) = match &item.target {
        CriteriaTarget::Product {
            product_code,
            variant_code,
        } => (product_code, variant_code),
        CriteriaTarget::Attribute { token, value } => (token, value),
    };

    let matched = if item.is_matched {
        let ids: String = item
            .matched_line_ids
            .iter()
            .map(ToString::to_string)
            .collect();
        format!(" Matched Lines: {ids}")
    } else {
        String::new()
    };

    format!(
        "{CRITERIA_ITEM}{} : {first} {second} {matched}",
        item.target.item_type()
    )
}

fn action_line(action: &MissedPromotionAction) -> String {
    let details = match &action.details {
        ActionDetails::PercentageDiscount { percentage } => {
            format!("{} [{}%]", action.details, two_decimals(*percentage))
        }
        other => other.to_string(),
    };
    format!(
        "{DETAIL}Apply to: {}, Action: {details}, Save From: {}",
        action.applies_to, action.save_from
    )
}

#[cfg(test)]
#[path = "missed_test.rs"]
mod tests;
