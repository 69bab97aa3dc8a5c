//! Idea entity model and DTOs.

use ideabox_core::ownership::Owned;
use ideabox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::bookmark::Bookmark;
use crate::models::comment::Comment;
use crate::models::requirement::Requirement;

/// An idea row from the `ideas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Idea {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Idea {
    fn owner_id(&self) -> DbId {
        self.owner_id
    }
}

/// DTO for creating a new idea. The owner comes from the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIdea {
    pub title: String,
    pub content: String,
}

/// DTO for updating an existing idea. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIdea {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// An idea together with everything attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaWithDetails {
    #[serde(flatten)]
    pub idea: Idea,
    pub requirements: Vec<Requirement>,
    pub comments: Vec<Comment>,
    pub bookmarks: Vec<Bookmark>,
}
