//! HTTP client for the hosted promotions service.
//!
//! Every operation is a JSON `POST` to a path under the base URL. The
//! company key travels in the request body, so the client itself holds no
//! credentials.

use std::time::Duration;

use promo_core::ServiceTarget;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PromoError;

/// Client for the promotions service.
///
/// Use [`PromoClient::new`] for a hosted environment or
/// [`PromoClient::with_base_url`] to point at a mock server in tests.
pub struct PromoClient {
    client: Client,
    base_url: Url,
}

impl PromoClient {
    /// Creates a client for the given hosted environment.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        target: ServiceTarget,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PromoError> {
        Self::with_base_url(target.base_url(), timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PromoError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PromoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joined paths land under the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PromoError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub(crate) fn build_url(&self, path: &str) -> Result<Url, PromoError> {
        self.base_url
            .join(path)
            .map_err(|e| PromoError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// Sends `request` as JSON to `path`, asserts a 2xx HTTP status, and
    /// parses the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::Http`] on network failure or a non-2xx status.
    /// Returns [`PromoError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn post_json<Req, T>(&self, path: &str, request: &Req) -> Result<T, PromoError>
    where
        Req: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path)?;
        tracing::debug!(%url, "sending promotions service request");

        let response = self.client.post(url.clone()).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "promotions service returned non-success status");
        }
        let response = response.error_for_status()?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PromoError::Deserialize {
            context: path.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
