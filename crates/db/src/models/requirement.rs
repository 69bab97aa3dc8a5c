//! Requirement (generated document) entity model.
//!
//! Requirements are immutable: there is a create DTO but no update DTO.

use ideabox_core::llm_model::LlmModel;
use ideabox_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A requirement row from the `requirements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Requirement {
    pub id: DbId,
    pub idea_id: DbId,
    pub content: String,
    /// Wire token of the model that produced `content` (see [`LlmModel`]).
    pub llm_model: String,
    pub created_at: Timestamp,
}

/// Input for recording a freshly generated document.
///
/// Built by the generation handler from the orchestrator's output; never
/// deserialized from a request body.
#[derive(Debug, Clone)]
pub struct CreateRequirement {
    pub idea_id: DbId,
    pub content: String,
    pub llm_model: LlmModel,
}
