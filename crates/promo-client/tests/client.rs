//! Integration tests for `PromoClient` using wiremock HTTP mocks.

use chrono::NaiveDate;
use promo_client::{
    BasketRequest, BasketRequestItem, CouponCodesExportRequest, CouponCodesImportRequest,
    CouponCodesImportRequestItem, ProductImportRequest, PromoClient, PromoError,
    PromotionDetailsRequest, RequestPagination,
};
use promo_core::model::{ActionDetails, CouponCodeStatus, CriteriaTarget, Outcome, SaveFrom};
use rust_decimal::Decimal;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PromoClient {
    PromoClient::with_base_url(base_url, 30, "promo-test")
        .expect("client construction should not fail")
}

fn sale_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn basket_request(missed: bool) -> BasketRequest {
    let mut request = BasketRequest {
        company_key: "company-key".to_string(),
        id: "basket-1".to_string(),
        sale_date_time: sale_time(),
        get_missed_promotions: missed,
        delivery_price: None,
        delivery_method: None,
        customer_group: None,
        channel: None,
        store_group: None,
        store: None,
        custom_attributes: vec![],
        items: vec![],
    };
    request.add_item(BasketRequestItem::new(
        1,
        "PR-25",
        Decimal::new(2756, 2),
        Decimal::from(2),
    ));
    request
}

#[tokio::test]
async fn submit_basket_returns_parsed_response() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "Summary": {
            "ProcessingResult": true,
            "Messages": [],
            "AppliedPromotions": [
                {
                    "PromotionId": 7,
                    "InstanceId": 1,
                    "PromotionName": "Shoe Deal",
                    "PromotionTypeDisplay": "Bundle",
                    "DiscountAmount": 5.5
                }
            ]
        },
        "Items": [
            {
                "Id": 1,
                "AppliedPromotions": [
                    { "PromotionId": 7, "InstanceId": 1, "DiscountAmount": 5.5 }
                ]
            }
        ],
        "TotalDiscount": 5.5,
        "TotalIssuedPoints": 0,
        "Coupons": [ { "Issued": true, "Code": "WELCOME" } ],
        "MissedPromotions": [
            {
                "Category": "Product",
                "PromotionTypeDisplay": "Buy X Get Y",
                "PromotionName": "Two For One",
                "Criteria": {
                    "BasketAdditionalSpend": 0,
                    "TotalAdditionalSpend": 0,
                    "CriteriaItems": [
                        {
                            "Source": "Product",
                            "AdditionalQuantity": 1,
                            "AdditionalSpend": 0,
                            "OnlyMatchedItems": true,
                            "Items": [
                                {
                                    "ItemType": "Product",
                                    "ProductCode": "PR-25",
                                    "VariantCode": "",
                                    "IsMatched": true,
                                    "MatchedLineIds": [1]
                                }
                            ]
                        }
                    ]
                },
                "Action": {
                    "AppliesTo": "Product",
                    "Details": "PercentageDiscount",
                    "Percentage": 50,
                    "SaveFrom": "Cheapest"
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/basket/submit"))
        .and(body_partial_json(serde_json::json!({
            "CompanyKey": "company-key",
            "Id": "basket-1",
            "GetMissedPromotions": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .submit_basket(&basket_request(true))
        .await
        .expect("should parse basket response");

    assert!(response.summary.succeeded());
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].applied_promotions[0].promotion_id, 7);
    assert_eq!(response.total_discount, Decimal::new(55, 1));
    assert_eq!(response.coupons.len(), 1);

    let missed = &response.missed_promotions[0];
    assert_eq!(missed.action.save_from, SaveFrom::Cheapest);
    assert_eq!(
        missed.action.details,
        ActionDetails::PercentageDiscount {
            percentage: Decimal::from(50)
        }
    );
    let item = &missed.criteria.criteria_items[0].items[0];
    assert!(matches!(
        item.target,
        CriteriaTarget::Product { ref product_code, .. } if product_code == "PR-25"
    ));
}

#[tokio::test]
async fn failed_summary_is_returned_not_raised() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "Summary": {
            "ProcessingResult": false,
            "Messages": [ { "Code": "B1", "Message": "Invalid store" } ]
        }
    });

    Mock::given(method("POST"))
        .and(path("/basket/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .submit_basket(&basket_request(false))
        .await
        .expect("domain failure is still a response");

    assert!(!response.summary.succeeded());
    assert_eq!(response.summary.messages()[0].message, "Invalid store");
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn validate_coupon_code_sends_code_and_parses_coupon() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "Summary": { "ProcessingResult": true },
        "Coupon": {
            "CouponType": "Single Code",
            "Name": "Welcome",
            "GenerateOnDemand": false,
            "IssueOnly": false,
            "Codes": [
                {
                    "Code": "2EPoy3Rv_0WTjRjkt0V24g",
                    "Status": "Active",
                    "IsRedeemable": true,
                    "ValidFrom": "2026-01-01T00:00:00",
                    "ValidTo": "2026-12-31T23:59:59",
                    "UsesCount": 0
                }
            ]
        }
    });

    Mock::given(method("POST"))
        .and(path("/basket/validatecouponcode"))
        .and(body_partial_json(serde_json::json!({
            "CompanyKey": "company-key",
            "CouponCode": "2EPoy3Rv_0WTjRjkt0V24g"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .validate_coupon_code("company-key", "2EPoy3Rv_0WTjRjkt0V24g")
        .await
        .expect("should parse coupon validation");

    let coupon = response.coupon.expect("coupon should be present");
    assert_eq!(coupon.name, "Welcome");
    assert_eq!(coupon.codes[0].status, CouponCodeStatus::Active);
}

#[tokio::test]
async fn import_products_echoes_reference() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "Reference": "ref-42",
        "Summary": {
            "ProcessedSuccessfully": true,
            "Messages": [ { "Code": "IM105", "Message": "Import queued." } ]
        }
    });

    Mock::given(method("POST"))
        .and(path("/import/products"))
        .and(body_partial_json(serde_json::json!({ "Reference": "ref-42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = ProductImportRequest {
        company_key: "company-key".to_string(),
        reference: "ref-42".to_string(),
        products: vec![],
    };
    let response = client
        .import_products(&request)
        .await
        .expect("should parse import response");

    assert_eq!(response.reference, "ref-42");
    assert_eq!(response.summary.messages[0].code, "IM105");
}

#[tokio::test]
async fn export_promotions_for_basket_parses_list() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "Summary": { "ProcessingResult": true, "Messages": [] },
        "Promotions": [
            {
                "PromotionName": "Spend 50 Save 10",
                "PromotionType": "Basket Discount",
                "ValidFrom": "2026-10-01T00:00:00",
                "ValidTo": "2026-10-31T23:59:59",
                "HasAdditionalBasketRestrictions": false,
                "HasCouponRestrictions": true
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/export/promotionsforbasket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = PromotionDetailsRequest {
        company_key: "company-key".to_string(),
        validation_date: sale_time(),
        validate_for_time: false,
        customer_group: None,
        channel: None,
        store_group: None,
        store: None,
        custom_attributes: vec![],
    };
    let response = client
        .export_promotions_for_basket(&request)
        .await
        .expect("should parse promotions");

    assert_eq!(response.promotions.len(), 1);
    assert!(response.promotions[0].has_coupon_restrictions);
}

#[tokio::test]
async fn coupon_code_import_and_export_tolerate_missing_parts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/import/couponcodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/export/couponcodes"))
        .and(body_partial_json(serde_json::json!({
            "Pagination": { "Page": "1", "PageSize": 500 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Pagination": {
                "Page": 1,
                "PageSize": 500,
                "TotalItemCount": 0,
                "TotalPageCount": 0
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let import = CouponCodesImportRequest {
        company_key: "company-key".to_string(),
        coupon_key: None,
        coupon_codes: vec![CouponCodesImportRequestItem {
            code: "sample-003".to_string(),
            coupon_name: Some("Coupon from sample code".to_string()),
            ..CouponCodesImportRequestItem::default()
        }],
    };
    let imported = client
        .import_coupon_codes(&import)
        .await
        .expect("empty acknowledgement should parse");
    assert!(imported.summary.is_none());

    let export = CouponCodesExportRequest {
        company_key: "company-key".to_string(),
        coupon_key: "coupon-key".to_string(),
        pagination: Some(RequestPagination {
            page: "1".to_string(),
            page_size: 500,
        }),
        statuses: vec![CouponCodeStatus::Active],
    };
    let exported = client
        .export_coupon_codes(&export)
        .await
        .expect("partial export should parse");
    assert!(exported.summary.is_none());
    assert!(exported.coupon.is_none());
    assert_eq!(exported.pagination.map(|p| p.page_size), Some(500));
}

#[tokio::test]
async fn server_error_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/basket/submit"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .submit_basket(&basket_request(false))
        .await
        .unwrap_err();

    assert!(matches!(err, PromoError::Http(_)), "got: {err}");
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/basket/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .submit_basket(&basket_request(false))
        .await
        .unwrap_err();

    match err {
        PromoError::Deserialize { context, .. } => assert_eq!(context, "basket/submit"),
        other => panic!("expected Deserialize, got: {other}"),
    }
}
