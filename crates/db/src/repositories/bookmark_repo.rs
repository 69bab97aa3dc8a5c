//! Repository for the `bookmarks` table.

use ideabox_core::types::DbId;
use sqlx::PgPool;

use crate::models::bookmark::{Bookmark, CreateBookmark};

const COLUMNS: &str = "id, idea_id, user_id, position, note, created_at";

/// Provides inserts and listing for idea bookmarks.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Insert a bookmark by `user_id` on `idea_id`.
    pub async fn create(
        pool: &PgPool,
        idea_id: DbId,
        user_id: DbId,
        input: &CreateBookmark,
    ) -> Result<Bookmark, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookmarks (idea_id, user_id, position, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bookmark>(&query)
            .bind(idea_id)
            .bind(user_id)
            .bind(&input.position)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// List bookmarks on an idea, oldest first.
    pub async fn list_by_idea(pool: &PgPool, idea_id: DbId) -> Result<Vec<Bookmark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookmarks WHERE idea_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Bookmark>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }
}
