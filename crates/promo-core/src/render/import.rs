use super::summary::messages_text;
use crate::model::ProductImportResponse;

/// Message code the service uses when an import was queued rather than
/// processed immediately.
pub const IMPORT_QUEUED_CODE: &str = "IM105";

pub const IMPORT_QUEUED_HINT: &str = " - The import has been queued. Check progress in the Administration Portal under \
     'Configuration' > 'Import/Export' > 'Import History'.";

/// Import reference and message text, plus a hint line when the first
/// message says the import was queued.
#[must_use]
pub fn render_product_import(response: &ProductImportResponse) -> String {
    let mut out = format!(
        "Import Reference: {}, {}",
        response.reference,
        messages_text(&response.summary)
    );

    let queued = response
        .summary
        .messages
        .first()
        .is_some_and(|m| m.code.eq_ignore_ascii_case(IMPORT_QUEUED_CODE));
    if queued {
        out.push('\n');
        out.push_str(IMPORT_QUEUED_HINT);
    }
    out
}
