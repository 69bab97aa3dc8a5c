//! Generation orchestrator: selects an adapter by model and classifies failures.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use ideabox_core::llm_model::LlmModel;
use ideabox_core::requirement_prompt::{build_prompt, SYSTEM_INSTRUCTION};

use crate::anthropic::AnthropicProvider;
use crate::config::LlmConfig;
use crate::error::GenerationError;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::provider::{LlmProvider, ProviderError};

/// Dispatches requirement generation to the adapter registered for a model.
///
/// Each request maps to exactly one provider call: no retry, no fallback to
/// another provider. The registry is built once and shared read-only.
#[derive(Clone, Default)]
pub struct RequirementGenerator {
    providers: HashMap<LlmModel, Arc<dyn LlmProvider>>,
}

impl RequirementGenerator {
    /// An empty generator with no adapters registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the three built-in adapters, sharing one HTTP client.
    ///
    /// Fails only if the HTTP client cannot be built (TLS backend init).
    pub fn from_config(config: &LlmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::new()
            .with_provider(Arc::new(OpenAiProvider::new(
                client.clone(),
                config.openai.clone(),
            )))
            .with_provider(Arc::new(GeminiProvider::new(
                client.clone(),
                config.google.clone(),
            )))
            .with_provider(Arc::new(AnthropicProvider::new(
                client,
                config.claude.clone(),
            ))))
    }

    /// Register `provider` under its own model, replacing any previous adapter.
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.providers.insert(provider.model(), provider);
        self
    }

    /// Models that have an adapter registered and a key configured.
    pub fn available_models(&self) -> Vec<LlmModel> {
        LlmModel::ALL
            .into_iter()
            .filter(|m| self.providers.get(m).is_some_and(|p| p.is_configured()))
            .collect()
    }

    /// Generate a requirements document for an idea.
    ///
    /// The decoded provider text is returned unchanged.
    pub async fn generate_requirement(
        &self,
        idea_title: &str,
        idea_body: &str,
        model: LlmModel,
    ) -> Result<String, GenerationError> {
        let provider = self
            .providers
            .get(&model)
            .ok_or_else(|| GenerationError::UnsupportedModel(model.to_string()))?;

        if !provider.is_configured() {
            tracing::warn!(llm_model = %model, "Generation requested for unconfigured provider");
            return Err(GenerationError::ProviderUnavailable(model));
        }

        let prompt = build_prompt(idea_title, idea_body);
        tracing::info!(llm_model = %model, prompt_len = prompt.len(), "Dispatching generation");

        let started = Instant::now();
        match provider.generate(&prompt, SYSTEM_INSTRUCTION).await {
            Ok(text) => {
                tracing::info!(
                    llm_model = %model,
                    output_len = text.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Generation succeeded",
                );
                Ok(text)
            }
            Err(ProviderError::NotConfigured) => Err(GenerationError::ProviderUnavailable(model)),
            Err(source) => {
                tracing::warn!(
                    llm_model = %model,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %source,
                    "Generation failed",
                );
                Err(GenerationError::Provider { model, source })
            }
        }
    }
}
