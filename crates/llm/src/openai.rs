//! OpenAI chat-completions adapter.

use async_trait::async_trait;
use ideabox_core::llm_model::LlmModel;
use serde::{Deserialize, Serialize};

use crate::config::ProviderCredentials;
use crate::provider::{parse_response, require_key, LlmProvider, ProviderError};

/// Chat model used for requirement generation.
pub const MODEL_NAME: &str = "gpt-4";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Provider A: a single chat completion with a system and a user message.
pub struct OpenAiProvider {
    client: reqwest::Client,
    credentials: ProviderCredentials,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client, credentials: ProviderCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn build_request<'a>(prompt: &'a str, system_instruction: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: MODEL_NAME,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Take the first choice's message content.
    fn extract_text(response: ChatResponse) -> Result<String, ProviderError> {
        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("response has no choices".into()))?
            .message
            .content
            .ok_or_else(|| ProviderError::MalformedResponse("first choice has no content".into()))
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn model(&self) -> LlmModel {
        LlmModel::OpenAi
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
            .post(format!("{}/chat/completions", self.credentials.base_url))
            .bearer_auth(api_key)
            .json(&Self::build_request(prompt, system_instruction))
            .send()
            .await?;

        Self::extract_text(parse_response(response).await?)
    }
}
