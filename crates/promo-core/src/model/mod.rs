//! Response model for the hosted promotions service.
//!
//! Every type mirrors one JSON shape returned by the service. Field names
//! on the wire are `PascalCase`. The types carry no behaviour beyond small
//! accessors; report text is produced by [`crate::render`].

mod basket;
mod coupon;
mod export;
mod import;
mod missed;
mod summary;
mod wire_enum;

pub use basket::{
    AppliedPromotionLine, BasketResponse, IssuedCoupon, ResponseItem, SummaryAppliedPromotion,
};
pub use coupon::{CouponCode, CouponCodeStatus, CouponValidationResponse, ValidatedCoupon};
pub use export::{
    CouponCodesExportResponse, ExportPromotionDetailsItem, Pagination, PromotionDetailsResponse,
};
pub use import::{CouponCodesImportResponse, ProductImportResponse};
pub use missed::{
    ActionDetails, AppliesTo, CriteriaGroup, CriteriaItem, CriteriaItemType, CriteriaSource,
    CriteriaTarget, MissedPromotion, MissedPromotionAction, MissedPromotionCriteria, SaveFrom,
};
pub use summary::{
    BasketResponseSummary, ExportResponseSummary, ImportResponseSummary, Message, Outcome,
    ResponseSummary,
};
