//! Import endpoints.

use promo_core::model::{CouponCodesImportResponse, ProductImportResponse};

use crate::client::PromoClient;
use crate::error::PromoError;
use crate::requests::{CouponCodesImportRequest, ProductImportRequest};

impl PromoClient {
    /// Inserts or updates products. Existing product codes are updated.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn import_products(
        &self,
        request: &ProductImportRequest,
    ) -> Result<ProductImportResponse, PromoError> {
        tracing::info!(
            reference = %request.reference,
            products = request.products.len(),
            "importing products"
        );
        self.post_json("import/products", request).await
    }

    /// Pushes coupon codes into existing or new coupons.
    ///
    /// # Errors
    ///
    /// - [`PromoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PromoError::Deserialize`] if the response shape is unexpected.
    pub async fn import_coupon_codes(
        &self,
        request: &CouponCodesImportRequest,
    ) -> Result<CouponCodesImportResponse, PromoError> {
        tracing::info!(codes = request.coupon_codes.len(), "importing coupon codes");
        self.post_json("import/couponcodes", request).await
    }
}
