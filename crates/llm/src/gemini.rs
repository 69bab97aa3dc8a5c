//! Google Gemini content-generation adapter.
//!
//! A single-shot `generateContent` call with the prompt as the only
//! content part. No temperature or length settings are sent, and the
//! system instruction is not forwarded.

use async_trait::async_trait;
use ideabox_core::llm_model::LlmModel;
use serde::{Deserialize, Serialize};

use crate::config::ProviderCredentials;
use crate::provider::{parse_response, require_key, LlmProvider, ProviderError};

/// Gemini model used for requirement generation.
pub const MODEL_NAME: &str = "gemini-pro";
/// Header carrying the API key. Keeps the key out of the request URL.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Provider B.
pub struct GeminiProvider {
    client: reqwest::Client,
    credentials: ProviderCredentials,
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, credentials: ProviderCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn build_request(prompt: &str) -> GenerateContentRequest<'_> {
        GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("response has no candidates".into()))?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();

        if text.is_empty() {
            // Blocked or empty generations come back without text parts.
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
            return Err(ProviderError::MalformedResponse(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn model(&self) -> LlmModel {
        LlmModel::Google
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    async fn generate(
        &self,
        prompt: &str,
        _system_instruction: &str,
    ) -> Result<String, ProviderError> {
        let api_key = require_key(self.credentials.api_key.as_deref())?;

        let response = self
            .client
            .post(format!(
                "{}/models/{MODEL_NAME}:generateContent",
                self.credentials.base_url
            ))
            .header(API_KEY_HEADER, api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        Self::extract_text(parse_response(response).await?)
    }
}
