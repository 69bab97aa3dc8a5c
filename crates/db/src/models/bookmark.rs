//! Bookmark entity model and DTOs.

use ideabox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookmark row from the `bookmarks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bookmark {
    pub id: DbId,
    pub idea_id: DbId,
    pub user_id: DbId,
    pub position: serde_json::Value,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a bookmark.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookmark {
    pub position: serde_json::Value,
    pub note: Option<String>,
}
