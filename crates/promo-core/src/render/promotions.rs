use super::{push_line, timestamp};
use crate::model::ExportPromotionDetailsItem;

/// One block per promotion, in the order given.
#[must_use]
pub fn render_promotion_details(promotions: &[ExportPromotionDetailsItem]) -> String {
    let mut out = String::new();
    push_line(&mut out, "Get Basket Level Promotions for Day Response Received.");
    for promotion in promotions {
        push_line(
            &mut out,
            &format!(" - Promotion Name: {}", promotion.promotion_name),
        );
        push_line(&mut out, &format!(" - Type: {}", promotion.promotion_type));
        push_line(
            &mut out,
            &format!(" - Valid From: {}", timestamp(promotion.valid_from)),
        );
        push_line(
            &mut out,
            &format!(" - Valid To: {}", timestamp(promotion.valid_to)),
        );
        push_line(
            &mut out,
            &format!(
                " - HasAdditionalBasketRestrictions: {}",
                promotion.has_additional_basket_restrictions
            ),
        );
        push_line(
            &mut out,
            &format!(
                " - HasCouponRestrictions: {}",
                promotion.has_coupon_restrictions
            ),
        );
    }
    out
}
