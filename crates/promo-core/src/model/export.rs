use chrono::NaiveDateTime;
use serde::Deserialize;

use super::coupon::ValidatedCoupon;
use super::summary::{ExportResponseSummary, ResponseSummary};

/// Promotions valid for a day, for a basket or for a set of products.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PromotionDetailsResponse {
    pub summary: ResponseSummary,
    #[serde(default)]
    pub promotions: Vec<ExportPromotionDetailsItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportPromotionDetailsItem {
    #[serde(default)]
    pub promotion_name: String,
    #[serde(default)]
    pub promotion_type: String,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    #[serde(default)]
    pub has_additional_basket_restrictions: bool,
    #[serde(default)]
    pub has_coupon_restrictions: bool,
}

/// One page of coupon codes for a coupon. Every part may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCodesExportResponse {
    #[serde(default)]
    pub summary: Option<ExportResponseSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub coupon: Option<ValidatedCoupon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_item_count: i64,
    pub total_page_count: i64,
}
