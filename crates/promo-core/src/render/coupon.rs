use super::{push_line, timestamp};
use crate::model::{CouponCodesExportResponse, CouponCodesImportResponse, ValidatedCoupon};

pub const COUPON_CODES_IMPORTED: &str = "Coupon codes import request accepted.";
pub const COUPON_CODES_EXPORTED: &str = "Coupon codes export response received.";

/// Coupon definition followed by one block per code, in response order.
#[must_use]
pub fn render_validated_coupon(coupon: &ValidatedCoupon) -> String {
    let mut out = String::new();
    push_line(&mut out, "Coupon Validation Response Received.");
    push_line(&mut out, &format!(" - Coupon Type: {}", coupon.coupon_type));
    push_line(&mut out, &format!(" - Coupon Name: {}", coupon.name));
    push_line(
        &mut out,
        &format!(" - Generate on Demand?: {}", coupon.generate_on_demand),
    );
    push_line(&mut out, &format!(" - Issue Only?: {}", coupon.issue_only));
    push_line(&mut out, "   Codes:");

    for code in &coupon.codes {
        push_line(&mut out, &format!("    - Code: {}", code.code));
        push_line(&mut out, &format!("    - Status: {}", code.status));
        push_line(&mut out, &format!("    - IsRedeemable: {}", code.is_redeemable));
        push_line(
            &mut out,
            &format!("    - Valid From: {}", timestamp(code.valid_from)),
        );
        push_line(
            &mut out,
            &format!("    - Valid To: {}", timestamp(code.valid_to)),
        );
        push_line(&mut out, &format!("    - Uses: {}", code.uses_count));
        // Status closes each block as well as following the code.
        push_line(&mut out, &format!("    - Status: {}", code.status));
    }
    out
}

/// Fixed acknowledgement; the import response carries nothing else to show.
#[must_use]
pub fn render_coupon_codes_import(_response: &CouponCodesImportResponse) -> String {
    let mut out = String::new();
    push_line(&mut out, COUPON_CODES_IMPORTED);
    out
}

/// Acknowledgement, then whichever of messages, pagination and coupon the
/// service included.
#[must_use]
pub fn render_coupon_codes_export(response: &CouponCodesExportResponse) -> String {
    let mut out = String::new();
    push_line(&mut out, COUPON_CODES_EXPORTED);

    if let Some(summary) = &response.summary {
        for message in &summary.messages {
            push_line(
                &mut out,
                &format!(" - Message: [{}] {}", message.code, message.message),
            );
        }
    }

    if let Some(pagination) = &response.pagination {
        push_line(&mut out, &format!(" - Page: {}", pagination.page));
        push_line(&mut out, &format!(" - Page Size: {}", pagination.page_size));
        push_line(
            &mut out,
            &format!(" - Total Items: {}", pagination.total_item_count),
        );
        push_line(
            &mut out,
            &format!(" - Total Pages: {}", pagination.total_page_count),
        );
    }

    if let Some(coupon) = &response.coupon {
        out.push_str(&render_validated_coupon(coupon));
    }
    out
}
