use rust_decimal::Decimal;

use super::*;
use crate::model::{
    AppliesTo, BasketResponseSummary, CriteriaSource, MissedPromotionCriteria, SaveFrom,
};

fn basket(missed: Vec<MissedPromotion>) -> BasketResponse {
    BasketResponse {
        summary: BasketResponseSummary {
            processing_result: true,
            messages: vec![],
            applied_promotions: vec![],
        },
        items: vec![],
        total_discount: Decimal::ZERO,
        total_issued_points: Decimal::ZERO,
        coupons: vec![],
        missed_promotions: missed,
    }
}

fn group(quantity: Decimal, spend: Decimal, items: Vec<CriteriaItem>) -> CriteriaGroup {
    CriteriaGroup {
        source: CriteriaSource::Product,
        additional_quantity: quantity,
        additional_spend: spend,
        only_matched_items: false,
        items,
    }
}

fn action(details: ActionDetails) -> MissedPromotionAction {
    MissedPromotionAction {
        applies_to: AppliesTo::Product,
        details,
        save_from: SaveFrom::Cheapest,
    }
}

fn missed(criteria: MissedPromotionCriteria, details: ActionDetails) -> MissedPromotion {
    MissedPromotion {
        category: "Product".to_string(),
        promotion_type_display: "Buy X Get Y".to_string(),
        promotion_name: "Shoe Sale".to_string(),
        criteria,
        action: action(details),
    }
}

fn no_spend(groups: Vec<CriteriaGroup>) -> MissedPromotionCriteria {
    MissedPromotionCriteria {
        basket_additional_spend: Decimal::ZERO,
        total_additional_spend: Decimal::ZERO,
        criteria_items: groups,
    }
}

#[test]
fn empty_list_renders_fixed_sentence_only() {
    let text = render_missed_promotions(&basket(vec![]));
    assert_eq!(text, format!("\nMissed Promotions\n{NO_MISSED_PROMOTIONS}\n"));
}

#[test]
fn full_missed_promotion_block() {
    let criteria = MissedPromotionCriteria {
        basket_additional_spend: Decimal::new(2050, 2),
        total_additional_spend: Decimal::ZERO,
        criteria_items: vec![group(
            Decimal::from(5),
            Decimal::from(12),
            vec![
                CriteriaItem {
                    target: CriteriaTarget::Product {
                        product_code: "PR-25".to_string(),
                        variant_code: "RED".to_string(),
                    },
                    is_matched: true,
                    matched_line_ids: vec![1, 2],
                },
                CriteriaItem {
                    target: CriteriaTarget::Attribute {
                        token: "category".to_string(),
                        value: "shoes".to_string(),
                    },
                    is_matched: false,
                    matched_line_ids: vec![3],
                },
            ],
        )],
    };
    let text = render_missed_promotions(&basket(vec![missed(
        criteria,
        ActionDetails::PercentageDiscount {
            percentage: Decimal::from(15),
        },
    )]));

    let expected = "
Missed Promotions
 - Missed Promotion [Product, Buy X Get Y, Shoe Sale]
            -> Basket Additional Spend: 20.50
            -> Product, Additional Qty: 5Additional Spend: 12.00, Only Matched Items: false
               -- Product : PR-25 RED  Matched Lines: 12
               -- Attribute : category shoes\x20
            -> Apply to: Product, Action: PercentageDiscount [15.00%], Save From: Cheapest
";
    assert_eq!(text, expected);
}

#[test]
fn group_with_no_gap_omits_both_fragments() {
    let text = render_missed_promotions(&basket(vec![missed(
        no_spend(vec![group(Decimal::ZERO, Decimal::ZERO, vec![])]),
        ActionDetails::AmountOff,
    )]));
    assert!(
        text.contains("            -> Product, , Only Matched Items: false\n"),
        "got: {text}"
    );
    assert!(!text.contains("Additional Spend"));
    assert!(!text.contains("Additional Qty"));
}

#[test]
fn spend_lines_require_strictly_positive_values() {
    let criteria = MissedPromotionCriteria {
        basket_additional_spend: Decimal::ZERO,
        total_additional_spend: Decimal::new(-5, 0),
        criteria_items: vec![],
    };
    let text = render_missed_promotions(&basket(vec![missed(criteria, ActionDetails::AmountOff)]));
    assert!(!text.contains("Basket Additional Spend"));
    assert!(!text.contains("Total Additional Spend"));
}

#[test]
fn percentage_hidden_for_other_details() {
    let text = render_missed_promotions(&basket(vec![missed(
        no_spend(vec![]),
        ActionDetails::FixedPrice,
    )]));
    assert!(text.contains("Action: FixedPrice, Save From: Cheapest"));
    assert!(!text.contains('%'));
}

#[test]
fn only_quantity_fragment_when_spend_is_zero() {
    let text = render_missed_promotions(&basket(vec![missed(
        no_spend(vec![group(Decimal::from(2), Decimal::ZERO, vec![])]),
        ActionDetails::Points,
    )]));
    assert!(text.contains("-> Product, Additional Qty: 2, Only Matched Items: false"));
}
