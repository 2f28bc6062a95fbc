use serde::Deserialize;

use super::summary::ImportResponseSummary;

/// Result of a product import. `reference` echoes the request's reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductImportResponse {
    #[serde(default)]
    pub reference: String,
    pub summary: ImportResponseSummary,
}

/// Acknowledgement of a coupon code import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCodesImportResponse {
    #[serde(default)]
    pub summary: Option<ImportResponseSummary>,
}
