//! Repository for the `shares` table.

use ideabox_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::share::{CreateShare, Share};

const COLUMNS: &str = "id, idea_id, share_token, is_editable, expires_at, created_at";

/// Provides share-link creation and lookup.
pub struct ShareRepo;

impl ShareRepo {
    /// Create a share link for an idea with a freshly generated token.
    pub async fn create(
        pool: &PgPool,
        idea_id: DbId,
        input: &CreateShare,
    ) -> Result<Share, sqlx::Error> {
        let query = format!(
            "INSERT INTO shares (idea_id, share_token, is_editable, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Share>(&query)
            .bind(idea_id)
            .bind(Uuid::new_v4().simple().to_string())
            .bind(input.is_editable)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// List share links for an idea, newest first.
    pub async fn list_by_idea(pool: &PgPool, idea_id: DbId) -> Result<Vec<Share>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shares WHERE idea_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Share>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }
}
