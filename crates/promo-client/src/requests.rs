//! Request payloads sent to the promotions service.
//!
//! Every request names the company it targets through `company_key`.
//! Optional fields are omitted from the JSON when unset.

use chrono::NaiveDateTime;
use promo_core::model::CouponCodeStatus;
use rust_decimal::Decimal;
use serde::Serialize;

/// A free-form key/value pair attached to a basket, line or promotion query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomAttribute {
    pub name: String,
    pub value: String,
}

impl CustomAttribute {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// basket
// ---------------------------------------------------------------------------

/// A basket submitted for evaluation.
///
/// `id` must be unique per basket; resubmitting the same basket keeps its id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasketRequest {
    pub company_key: String,
    pub id: String,
    pub sale_date_time: NaiveDateTime,
    pub get_missed_promotions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub custom_attributes: Vec<CustomAttribute>,
    pub items: Vec<BasketRequestItem>,
}

impl BasketRequest {
    pub fn add_custom_attribute(&mut self, name: &str, value: &str) {
        self.custom_attributes.push(CustomAttribute::new(name, value));
    }

    pub fn add_item(&mut self, item: BasketRequestItem) {
        self.items.push(item);
    }
}

/// One basket line. A line may carry a quantity greater than one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasketRequestItem {
    pub id: i64,
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_code: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
    pub custom_attributes: Vec<CustomAttribute>,
}

impl BasketRequestItem {
    #[must_use]
    pub fn new(id: i64, product_code: &str, price: Decimal, quantity: Decimal) -> Self {
        Self {
            id,
            product_code: product_code.to_owned(),
            variant_code: None,
            price,
            quantity,
            custom_attributes: Vec::new(),
        }
    }

    pub fn add_custom_attribute(&mut self, name: &str, value: &str) {
        self.custom_attributes.push(CustomAttribute::new(name, value));
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponValidationRequest {
    pub company_key: String,
    pub coupon_code: String,
}

// ---------------------------------------------------------------------------
// import
// ---------------------------------------------------------------------------

/// Products to insert or update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductImportRequest {
    pub company_key: String,
    /// Caller-chosen reference echoed back in the response.
    pub reference: String,
    pub products: Vec<ProductImportRequestItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductImportRequestItem {
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_code: Option<String>,
    pub description: String,
    pub price: Decimal,
    /// Attributes that promotions can target. Unknown attribute names are
    /// created by the service.
    pub attributes: Vec<ProductImportRequestAttributeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductImportRequestAttributeItem {
    pub name: String,
    pub value: String,
}

/// Coupon codes to push into the service.
///
/// `coupon_key` may be left unset here and given per code instead, which
/// lets a single import also create a new coupon by name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCodesImportRequest {
    pub company_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_key: Option<String>,
    pub coupon_codes: Vec<CouponCodesImportRequestItem>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCodesImportRequestItem {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDateTime>,
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

/// Query for promotions valid on `validation_date` for a basket context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PromotionDetailsRequest {
    pub company_key: String,
    pub validation_date: NaiveDateTime,
    /// When false the time of `validation_date` is ignored and the whole
    /// day is considered.
    pub validate_for_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub custom_attributes: Vec<CustomAttribute>,
}

/// [`PromotionDetailsRequest`] narrowed to a list of products.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PromotionDetailsByProductRequest {
    #[serde(flatten)]
    pub details: PromotionDetailsRequest,
    pub products: Vec<ProductReference>,
}

impl PromotionDetailsByProductRequest {
    /// Adds a product; an empty `variant_code` means every variant.
    pub fn add_product(&mut self, product_code: &str, variant_code: &str) {
        self.products.push(ProductReference {
            product_code: product_code.to_owned(),
            variant_code: variant_code.to_owned(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductReference {
    pub product_code: String,
    pub variant_code: String,
}

/// Query for one page of a coupon's codes, filtered by status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponCodesExportRequest {
    pub company_key: String,
    pub coupon_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<RequestPagination>,
    pub statuses: Vec<CouponCodeStatus>,
}

impl CouponCodesExportRequest {
    pub fn add_status(&mut self, status: CouponCodeStatus) {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
    }
}

/// Page selector. The service takes the page number as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestPagination {
    pub page: String,
    pub page_size: i64,
}
