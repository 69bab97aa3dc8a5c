//! Share-link entity model and DTOs.

use ideabox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A share row from the `shares` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Share {
    pub id: DbId,
    pub idea_id: DbId,
    pub share_token: String,
    pub is_editable: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a share link. The token is generated server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateShare {
    #[serde(default)]
    pub is_editable: bool,
    pub expires_at: Option<Timestamp>,
}
