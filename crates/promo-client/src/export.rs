//! Export endpoints.

use promo_core::model::{CouponCodesExportResponse, PromotionDetailsResponse};

use crate::client::PromoClient;
use crate::error::PromoError;
use crate::requests::{
    CouponCodesExportRequest, PromotionDetailsByProductRequest, PromotionDetailsRequest,
};

impl PromoClient {
    /// Lists basket-level promotions valid on the request's validation date.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn export_promotions_for_basket(
        &self,
        request: &PromotionDetailsRequest,
    ) -> Result<PromotionDetailsResponse, PromoError> {
        tracing::info!(validation_date = %request.validation_date, "exporting basket promotions");
        self.post_json("export/promotionsforbasket", request).await
    }

    /// Lists promotions valid on the validation date for the given products.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn export_promotions_for_products(
        &self,
        request: &PromotionDetailsByProductRequest,
    ) -> Result<PromotionDetailsResponse, PromoError> {
        tracing::info!(
            validation_date = %request.details.validation_date,
            products = request.products.len(),
            "exporting product promotions"
        );
        self.post_json("export/promotionsforproducts", request).await
    }

    /// Fetches one page of coupon codes for a coupon.
    ///
    /// Only the page named in the request is fetched.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn export_coupon_codes(
        &self,
        request: &CouponCodesExportRequest,
    ) -> Result<CouponCodesExportResponse, PromoError> {
        tracing::info!(statuses = request.statuses.len(), "exporting coupon codes");
        self.post_json("export/couponcodes", request).await
    }
}
