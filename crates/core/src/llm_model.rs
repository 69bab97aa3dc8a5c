//! The closed set of LLM backends a requirement can be generated with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an LLM backend.
///
/// Serialized as the lowercase wire token (`"openai"`, `"google"`,
/// `"claude"`), which is also the value stored in `requirements.llm_model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmModel {
    /// OpenAI chat completions.
    #[serde(rename = "openai")]
    OpenAi,
    /// Google Gemini content generation.
    Google,
    /// Anthropic Claude messages.
    Claude,
}

impl LlmModel {
    /// Every supported model, in a stable order.
    pub const ALL: [LlmModel; 3] = [LlmModel::OpenAi, LlmModel::Google, LlmModel::Claude];

    /// The wire token for this model.
    pub fn as_str(self) -> &'static str {
        match self {
            LlmModel::OpenAi => "openai",
            LlmModel::Google => "google",
            LlmModel::Claude => "claude",
        }
    }
}

impl fmt::Display for LlmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_and_display_agree_on_every_token() {
        for model in LlmModel::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{model}\""));
            assert_eq!(serde_json::from_str::<LlmModel>(&json).unwrap(), model);
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_tokens() {
        for token in ["\"gpt-4\"", "\"OpenAI\"", "\"\"", "\"claude \""] {
            assert!(serde_json::from_str::<LlmModel>(token).is_err(), "{token}");
        }
    }

    #[test]
    fn serde_uses_wire_tokens() {
        let json = serde_json::to_string(&LlmModel::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");

        let model: LlmModel = serde_json::from_str("\"claude\"").unwrap();
        assert_eq!(model, LlmModel::Claude);

        assert!(serde_json::from_str::<LlmModel>("\"mistral\"").is_err());
    }
}
