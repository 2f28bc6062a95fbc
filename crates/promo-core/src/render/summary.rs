use crate::model::Outcome;

pub const ERROR_PREFIX: &str = "ERROR - ";

/// Concatenates the text of every message, in order, with no separator.
#[must_use]
pub fn messages_text<S: Outcome + ?Sized>(summary: &S) -> String {
    summary
        .messages()
        .iter()
        .map(|m| m.message.as_str())
        .collect()
}

/// Error line for a summary whose success flag is false. Message codes are
/// not echoed.
#[must_use]
pub fn render_error<S: Outcome + ?Sized>(summary: &S) -> String {
    format!("{ERROR_PREFIX}{}", messages_text(summary))
}
