//! Requirements-document generation over interchangeable LLM backends.
//!
//! - [`provider`] -- the [`LlmProvider`] capability and adapter-level errors.
//! - [`openai`], [`gemini`], [`anthropic`] -- one adapter per backend.
//! - [`config`] -- credentials and endpoints, read once at startup.
//! - [`generator`] -- [`RequirementGenerator`], which picks an adapter by
//!   [`LlmModel`](ideabox_core::llm_model::LlmModel) and classifies failures.

pub mod anthropic;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod openai;
pub mod provider;

pub use config::{LlmConfig, ProviderCredentials};
pub use error::GenerationError;
pub use generator::RequirementGenerator;
pub use provider::{LlmProvider, ProviderError};
