//! Sample requests used by each scenario.
//!
//! Product codes refer to the sample product set created for every
//! evaluation company.

use chrono::{Duration, NaiveDateTime};
use promo_client::{
    BasketRequest, BasketRequestItem, CouponCodesExportRequest, CouponCodesImportRequest,
    CouponCodesImportRequestItem, ProductImportRequest, ProductImportRequestAttributeItem,
    ProductImportRequestItem, PromotionDetailsByProductRequest, PromotionDetailsRequest,
    RequestPagination,
};
use promo_core::model::CouponCodeStatus;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Code validated by the coupon scenario; also imported by the push scenario.
pub const SAMPLE_COUPON_CODE: &str = "2EPoy3Rv_0WTjRjkt0V24g";

pub const SAMPLE_IMPORTED_PRODUCT: &str = "EXAMPLE_IMPORTED_PRODUCT_1";

const NEW_COUPON_NAME: &str = "Coupon from sample code";

/// A two-line basket (three items) with common header attributes set.
pub fn basket_request(
    company_key: &str,
    get_missed_promotions: bool,
    now: NaiveDateTime,
) -> BasketRequest {
    let mut request = BasketRequest {
        company_key: company_key.to_owned(),
        id: Uuid::new_v4().to_string(),
        sale_date_time: now,
        get_missed_promotions,
        delivery_price: Some(Decimal::new(1099, 2)),
        delivery_method: Some("NEXTDAY".to_owned()),
        customer_group: Some("NORMAL".to_owned()),
        channel: Some("RETAIL".to_owned()),
        store_group: Some("LONDON".to_owned()),
        store: Some("KINGSTON".to_owned()),
        custom_attributes: Vec::new(),
        items: Vec::new(),
    };
    request.add_custom_attribute("testbasket", "true");

    // adidas Consortium Campus 80s Running Shoes
    let mut shoes = BasketRequestItem::new(1, "PR-25", Decimal::new(2756, 2), Decimal::from(2));
    shoes.add_custom_attribute("message", "This is my t-shirt!");
    request.add_item(shoes);

    // Custom T-Shirt
    request.add_item(BasketRequestItem::new(
        2,
        "PR-29",
        Decimal::new(1500, 2),
        Decimal::ONE,
    ));

    request
}

/// One product with a category attribute and an attribute holding the
/// import time, so repeated runs visibly update it.
pub fn product_import_request(company_key: &str, now: NaiveDateTime) -> ProductImportRequest {
    ProductImportRequest {
        company_key: company_key.to_owned(),
        reference: Uuid::new_v4().to_string(),
        products: vec![ProductImportRequestItem {
            product_code: SAMPLE_IMPORTED_PRODUCT.to_owned(),
            variant_code: None,
            description: "Example imported product".to_owned(),
            price: Decimal::new(10_999, 2),
            attributes: vec![
                ProductImportRequestAttributeItem {
                    name: "category".to_owned(),
                    value: "imported_items".to_owned(),
                },
                ProductImportRequestAttributeItem {
                    name: "last_update_info".to_owned(),
                    value: now.format("%Y-%m-%d %H:%M:%S").to_string(),
                },
            ],
        }],
    }
}

/// All promotions for the day of `now`, for the sample store context.
pub fn promotion_details_request(company_key: &str, now: NaiveDateTime) -> PromotionDetailsRequest {
    PromotionDetailsRequest {
        company_key: company_key.to_owned(),
        validation_date: now,
        validate_for_time: false,
        customer_group: Some("NORMAL".to_owned()),
        channel: Some("RETAIL".to_owned()),
        store_group: Some("LONDON".to_owned()),
        store: Some("KINGSTON".to_owned()),
        custom_attributes: Vec::new(),
    }
}

/// As [`promotion_details_request`], restricted to the imported product.
pub fn promotion_details_by_product_request(
    company_key: &str,
    now: NaiveDateTime,
) -> PromotionDetailsByProductRequest {
    let mut request = PromotionDetailsByProductRequest {
        details: promotion_details_request(company_key, now),
        products: Vec::new(),
    };
    request.add_product(SAMPLE_IMPORTED_PRODUCT, "");
    request
}

/// Four codes: two for the configured coupon (one unrestricted, one single
/// use for a week) and two that create a new coupon by name.
pub fn coupon_codes_import_request(
    company_key: &str,
    coupon_key: &str,
    now: NaiveDateTime,
) -> CouponCodesImportRequest {
    CouponCodesImportRequest {
        company_key: company_key.to_owned(),
        coupon_key: None,
        coupon_codes: vec![
            CouponCodesImportRequestItem {
                code: SAMPLE_COUPON_CODE.to_owned(),
                coupon_key: Some(coupon_key.to_owned()),
                ..CouponCodesImportRequestItem::default()
            },
            CouponCodesImportRequestItem {
                code: "Single-Use".to_owned(),
                coupon_key: Some(coupon_key.to_owned()),
                maximum_uses: Some(1),
                valid_from: Some(now),
                valid_to: Some(now + Duration::days(7)),
                ..CouponCodesImportRequestItem::default()
            },
            CouponCodesImportRequestItem {
                code: "sample-003".to_owned(),
                coupon_name: Some(NEW_COUPON_NAME.to_owned()),
                ..CouponCodesImportRequestItem::default()
            },
            CouponCodesImportRequestItem {
                code: "sample-004".to_owned(),
                coupon_name: Some(NEW_COUPON_NAME.to_owned()),
                ..CouponCodesImportRequestItem::default()
            },
        ],
    }
}

/// First page of up to 500 codes in any status.
pub fn coupon_codes_export_request(
    company_key: &str,
    coupon_key: &str,
) -> CouponCodesExportRequest {
    let mut request = CouponCodesExportRequest {
        company_key: company_key.to_owned(),
        coupon_key: coupon_key.to_owned(),
        pagination: Some(RequestPagination {
            page: "1".to_owned(),
            page_size: 500,
        }),
        statuses: Vec::new(),
    };
    for status in [
        CouponCodeStatus::Active,
        CouponCodeStatus::Created,
        CouponCodeStatus::Expired,
        CouponCodeStatus::Issued,
        CouponCodeStatus::Redeemed,
        CouponCodeStatus::Withdrawn,
    ] {
        request.add_status(status);
    }
    request
}
