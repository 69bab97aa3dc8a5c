//! Comment entity model and DTOs.

use ideabox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub idea_id: DbId,
    pub user_id: DbId,
    pub content: String,
    /// Optional anchor inside the idea (free-form JSON from the client).
    pub position: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for creating a comment. `idea_id` and `user_id` come from the route and caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub position: Option<serde_json::Value>,
}
