//! Runs one scenario end to end: build the sample request, call the
//! service, and turn the outcome into report text.

use chrono::NaiveDateTime;
use promo_client::{PromoClient, PromoError};
use promo_core::model::Outcome;
use promo_core::render::{
    render_basket, render_coupon_codes_export, render_coupon_codes_import, render_error,
    render_missed_promotions, render_product_import, render_promotion_details,
    render_validated_coupon, ERROR_PREFIX,
};
use promo_core::Credentials;

use crate::samples;
use crate::scenario::Scenario;

/// Text shown when validation succeeds yet the service sends no coupon.
pub const NO_COUPON_RETURNED: &str = "coupon validation succeeded but no coupon was returned";

/// Executes `scenario` and returns its report.
///
/// Never fails: transport and decoding errors come back as `ERROR - ` text,
/// as do responses whose summary reports failure.
pub async fn run_scenario(
    client: &PromoClient,
    credentials: &Credentials,
    scenario: Scenario,
    now: NaiveDateTime,
) -> String {
    tracing::info!(?scenario, "running scenario");
    match execute(client, credentials, scenario, now).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(?scenario, error = %e, "scenario failed");
            format!("{ERROR_PREFIX}{e}")
        }
    }
}

async fn execute(
    client: &PromoClient,
    credentials: &Credentials,
    scenario: Scenario,
    now: NaiveDateTime,
) -> Result<String, PromoError> {
    let company_key = credentials.company_key.as_str();
    let coupon_key = credentials.coupon_import_key.as_str();

    let report = match scenario {
        Scenario::SubmitBasket => {
            let request = samples::basket_request(company_key, false, now);
            let response = client.submit_basket(&request).await?;
            report_or_error(&response.summary, || render_basket(&response))
        }
        Scenario::CreateUpdateProduct => {
            let request = samples::product_import_request(company_key, now);
            let response = client.import_products(&request).await?;
            report_or_error(&response.summary, || render_product_import(&response))
        }
        Scenario::ValidateCouponCode => {
            let response = client
                .validate_coupon_code(company_key, samples::SAMPLE_COUPON_CODE)
                .await?;
            if response.summary.succeeded() {
                match &response.coupon {
                    Some(coupon) => render_validated_coupon(coupon),
                    None => format!("{ERROR_PREFIX}{NO_COUPON_RETURNED}"),
                }
            } else {
                render_error(&response.summary)
            }
        }
        Scenario::PromotionsForDay => {
            let request = samples::promotion_details_request(company_key, now);
            let response = client.export_promotions_for_basket(&request).await?;
            report_or_error(&response.summary, || {
                render_promotion_details(&response.promotions)
            })
        }
        Scenario::PromotionsForProduct => {
            let request = samples::promotion_details_by_product_request(company_key, now);
            let response = client.export_promotions_for_products(&request).await?;
            report_or_error(&response.summary, || {
                render_promotion_details(&response.promotions)
            })
        }
        Scenario::MissedPromotions => {
            let request = samples::basket_request(company_key, true, now);
            let response = client.submit_basket(&request).await?;
            report_or_error(&response.summary, || {
                let mut report = render_basket(&response);
                report.push_str(&render_missed_promotions(&response));
                report
            })
        }
        Scenario::PushCouponCodes => {
            let request = samples::coupon_codes_import_request(company_key, coupon_key, now);
            let response = client.import_coupon_codes(&request).await?;
            match &response.summary {
                Some(summary) if !summary.succeeded() => render_error(summary),
                _ => render_coupon_codes_import(&response),
            }
        }
        Scenario::RetrieveCouponCodes => {
            let request = samples::coupon_codes_export_request(company_key, coupon_key);
            let response = client.export_coupon_codes(&request).await?;
            match &response.summary {
                Some(summary) if !summary.succeeded() => render_error(summary),
                _ => render_coupon_codes_export(&response),
            }
        }
    };
    Ok(report)
}

/// Renders with `render` on success, otherwise the summary's messages.
fn report_or_error<S: Outcome>(summary: &S, render: impl FnOnce() -> String) -> String {
    if summary.succeeded() {
        render()
    } else {
        render_error(summary)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
