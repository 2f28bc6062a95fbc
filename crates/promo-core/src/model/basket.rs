use rust_decimal::Decimal;
use serde::Deserialize;

use super::missed::MissedPromotion;
use super::summary::BasketResponseSummary;

/// Result of submitting a basket for evaluation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasketResponse {
    pub summary: BasketResponseSummary,
    #[serde(default)]
    pub items: Vec<ResponseItem>,
    #[serde(default)]
    pub total_discount: Decimal,
    #[serde(default)]
    pub total_issued_points: Decimal,
    #[serde(default)]
    pub coupons: Vec<IssuedCoupon>,
    /// Only populated when the request asked for missed promotions.
    #[serde(default)]
    pub missed_promotions: Vec<MissedPromotion>,
}

/// One basket line as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseItem {
    pub id: i64,
    #[serde(default)]
    pub applied_promotions: Vec<AppliedPromotionLine>,
}

/// A promotion applied to a single line. Carries no name; resolve it
/// against [`BasketResponseSummary::applied_promotions`] by `promotion_id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppliedPromotionLine {
    pub promotion_id: i64,
    pub instance_id: i64,
    #[serde(default)]
    pub discount_amount: Decimal,
}

/// A promotion applied anywhere in the basket, with its display details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryAppliedPromotion {
    pub promotion_id: i64,
    pub instance_id: i64,
    #[serde(default)]
    pub promotion_name: String,
    #[serde(default)]
    pub promotion_type_display: String,
    #[serde(default)]
    pub discount_amount: Decimal,
}

/// A coupon the basket qualified for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IssuedCoupon {
    pub issued: bool,
    #[serde(default)]
    pub coupon_key: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
