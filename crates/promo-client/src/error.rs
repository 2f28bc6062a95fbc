use thiserror::Error;

/// Errors returned by the promotions service client.
///
/// A response whose summary reports failure is not an error here; it is
/// returned to the caller like any other response.
#[derive(Debug, Error)]
pub enum PromoError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
