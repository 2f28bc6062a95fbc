//! Basket evaluation endpoints.

use promo_core::model::{BasketResponse, CouponValidationResponse};

use crate::client::PromoClient;
use crate::error::PromoError;
use crate::requests::{BasketRequest, CouponValidationRequest};

impl PromoClient {
    /// Submits a basket for promotion evaluation.
    ///
    /// Missed promotions are only returned when the request sets
    /// `get_missed_promotions`.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn submit_basket(&self, request: &BasketRequest) -> Result<BasketResponse, PromoError> {
        tracing::info!(
            basket_id = %request.id,
            items = request.items.len(),
            missed = request.get_missed_promotions,
            "submitting basket"
        );
        self.post_json("basket/submit", request).await
    }

    /// Validates a single coupon code and returns its coupon definition.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn validate_coupon_code(
        &self,
        company_key: &str,
        coupon_code: &str,
    ) -> Result<CouponValidationResponse, PromoError> {
        let request = CouponValidationRequest {
            company_key: company_key.to_owned(),
            coupon_code: coupon_code.to_owned(),
        };
        tracing::info!(coupon_code, "validating coupon code");
        self.post_json("basket/validatecouponcode", &request).await
    }
}
