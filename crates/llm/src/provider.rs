//! The provider capability shared by every LLM backend.

use async_trait::async_trait;
use ideabox_core::llm_model::LlmModel;

/// Errors raised inside a single provider adapter.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API key was configured for this provider at startup.
    #[error("API key is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    ///
    /// The request URL is stripped before the error is stored.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but did not carry the expected text.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.without_url())
    }
}

/// A backend that turns a prompt into text.
///
/// Implementations hold their own credentials and HTTP client; both are
/// fixed at construction and read-only afterwards.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// The model identifier this adapter serves.
    fn model(&self) -> LlmModel;

    /// Whether an API key was configured. Checked without any network I/O.
    fn is_configured(&self) -> bool;

    /// Issue exactly one generation call and return the decoded text.
    async fn generate(&self, prompt: &str, system_instruction: &str)
        -> Result<String, ProviderError>;
}

/// Return the configured key, or [`ProviderError::NotConfigured`].
pub(crate) fn require_key(api_key: Option<&str>) -> Result<&str, ProviderError> {
    api_key.ok_or(ProviderError::NotConfigured)
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`ProviderError::Api`] containing the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
