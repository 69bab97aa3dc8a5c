use ideabox_core::llm_model::LlmModel;

use crate::provider::ProviderError;

/// Classified failure of a generation request.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The requested model has no adapter registered.
    #[error("Unsupported LLM model: {0}")]
    UnsupportedModel(String),

    /// The selected provider has no API key configured. No call was attempted.
    #[error("{0} API key is not configured")]
    ProviderUnavailable(LlmModel),

    /// The provider call itself failed. The adapter error is kept as the source.
    #[error("{model} provider call failed: {source}")]
    Provider {
        model: LlmModel,
        #[source]
        source: ProviderError,
    },
}
