pub mod basket;
pub mod client;
pub mod error;
pub mod export;
pub mod import;
pub mod requests;

pub use client::PromoClient;
pub use error::PromoError;
pub use requests::{
    BasketRequest, BasketRequestItem, CouponCodesExportRequest, CouponCodesImportRequest,
    CouponCodesImportRequestItem, CouponValidationRequest, CustomAttribute,
    ProductImportRequest, ProductImportRequestAttributeItem, ProductImportRequestItem,
    ProductReference, PromotionDetailsByProductRequest, PromotionDetailsRequest,
    RequestPagination,
};
