//! Anthropic messages adapter.

use async_trait::async_trait;
use ideabox_core::llm_model::LlmModel;
use serde::{Deserialize, Serialize};

use crate::config::ProviderCredentials;
use crate::provider::{parse_response, require_key, LlmProvider, ProviderError};

/// Claude model used for requirement generation.
pub const MODEL_NAME: &str = "claude-3-opus-20240229";
/// Value sent in the `anthropic-version` header.
pub const API_VERSION: &str = "2023-06-01";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

/// Provider C: the system instruction travels in its own field.
pub struct AnthropicProvider {
    client: reqwest::Client,
    credentials: ProviderCredentials,
}

impl AnthropicProvider {
    pub fn new(client: reqwest::Client, credentials: ProviderCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn build_request<'a>(prompt: &'a str, system_instruction: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: MODEL_NAME,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system: system_instruction,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        }
    }

    /// Take the text of the first content block.
    fn extract_text(response: MessagesResponse) -> Result<String, ProviderError> {
        let block = response
            .content
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("response has no content".into()))?;

        block.text.ok_or_else(|| {
            ProviderError::MalformedResponse(format!(
                "first content block is '{}', not text",
                block.kind
            ))
        })
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn model(&self) -> LlmModel {
        LlmModel::Claude
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, ProviderError> {
        let api_key = require_key(self.credentials.api_key.as_deref())?;

        let response = self
            .client
            .post(format!("{}/messages", self.credentials.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&Self::build_request(prompt, system_instruction))
            .send()
            .await?;

        Self::extract_text(parse_response(response).await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_separates_system_from_messages() {
        let body =
            serde_json::to_value(AnthropicProvider::build_request("PROMPT", "SYSTEM")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "claude-3-opus-20240229",
                "max_tokens": 2000,
                "temperature": 0.7,
                "system": "SYSTEM",
                "messages": [{ "role": "user", "content": "PROMPT" }]
            })
        );
    }

    #[test]
    fn decodes_first_content_block() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": "DOC" }],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(AnthropicProvider::extract_text(response).unwrap(), "DOC");
    }

    #[test]
    fn missing_or_non_text_block_is_malformed() {
        let response: MessagesResponse =
            serde_json::from_value(json!({ "content": [] })).unwrap();
        assert_matches!(
            AnthropicProvider::extract_text(response),
            Err(ProviderError::MalformedResponse(_))
        );

        let response: MessagesResponse = serde_json::from_value(json!({
            "content": [{ "type": "tool_use", "id": "t1", "name": "x", "input": {} }]
        }))
        .unwrap();
        assert_matches!(
            AnthropicProvider::extract_text(response),
            Err(ProviderError::MalformedResponse(msg)) if msg.contains("tool_use")
        );
    }

    #[tokio::test]
    async fn unconfigured_provider_fails_before_any_request() {
        let provider = AnthropicProvider::new(
            reqwest::Client::new(),
            ProviderCredentials::new(None, "http://127.0.0.1:9"),
        );
        assert_matches!(
            provider.generate("p", "s").await,
            Err(ProviderError::NotConfigured)
        );
    }
}
