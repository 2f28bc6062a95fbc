use chrono::NaiveDateTime;
use serde::Deserialize;

use super::summary::ResponseSummary;
use super::wire_enum::wire_enum;

/// Result of validating a single coupon code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponValidationResponse {
    pub summary: ResponseSummary,
    /// Absent when validation fails.
    #[serde(default)]
    pub coupon: Option<ValidatedCoupon>,
}

/// A coupon definition together with the codes the service returned for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidatedCoupon {
    #[serde(default)]
    pub coupon_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub generate_on_demand: bool,
    #[serde(default)]
    pub issue_only: bool,
    #[serde(default)]
    pub codes: Vec<CouponCode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCode {
    pub code: String,
    pub status: CouponCodeStatus,
    #[serde(default)]
    pub is_redeemable: bool,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    #[serde(default)]
    pub uses_count: i64,
}

wire_enum!(
    /// Lifecycle state of a coupon code.
    CouponCodeStatus {
        Created,
        Issued,
        Active,
        Redeemed,
        Expired,
        Withdrawn,
    }
);
