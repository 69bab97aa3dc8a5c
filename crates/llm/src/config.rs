//! Provider credentials and endpoints.

use std::time::Duration;

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Default Google Generative Language API base URL.
pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Anthropic API base URL.
pub const DEFAULT_CLAUDE_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Default per-request timeout for provider calls, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

/// API key and endpoint for one provider.
#[derive(Clone)]
pub struct ProviderCredentials {
    /// `None` when the key was absent or blank at startup.
    pub api_key: Option<String>,
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl ProviderCredentials {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// Keys must never end up in logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for all LLM providers, loaded once at process start.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub openai: ProviderCredentials,
    pub google: ProviderCredentials,
    pub claude: ProviderCredentials,
    /// Timeout applied by the shared HTTP client to each provider call.
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                                            |
    /// |----------------------------|----------|----------------------------------------------------|
    /// | `OPENAI_API_KEY`           | no       | --                                                 |
    /// | `GOOGLE_API_KEY`           | no       | --                                                 |
    /// | `CLAUDE_API_KEY`           | no       | --                                                 |
    /// | `OPENAI_BASE_URL`          | no       | `https://api.openai.com/v1`                        |
    /// | `GOOGLE_BASE_URL`          | no       | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `CLAUDE_BASE_URL`          | no       | `https://api.anthropic.com/v1`                     |
    /// | `LLM_REQUEST_TIMEOUT_SECS` | no       | `90`                                               |
    ///
    /// A missing key only disables that provider; requests for it fail with
    /// `ProviderUnavailable`.
    ///
    /// # Panics
    ///
    /// Panics if `LLM_REQUEST_TIMEOUT_SECS` is set but not a valid `u64`.
    pub fn from_env() -> Self {
        let credentials = |key_var: &str, url_var: &str, default_url: &str| {
            ProviderCredentials::new(
                std::env::var(key_var).ok(),
                std::env::var(url_var).unwrap_or_else(|_| default_url.to_string()),
            )
        };

        let request_timeout_secs: u64 = std::env::var("LLM_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .expect("LLM_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            openai: credentials("OPENAI_API_KEY", "OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            google: credentials("GOOGLE_API_KEY", "GOOGLE_BASE_URL", DEFAULT_GOOGLE_BASE_URL),
            claude: credentials("CLAUDE_API_KEY", "CLAUDE_BASE_URL", DEFAULT_CLAUDE_BASE_URL),
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
