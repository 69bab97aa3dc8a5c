//! Repository for the `comments` table.

use ideabox_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, idea_id, user_id, content, position, created_at";

/// Provides inserts and listing for idea comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment by `user_id` on `idea_id`.
    pub async fn create(
        pool: &PgPool,
        idea_id: DbId,
        user_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (idea_id, user_id, content, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(idea_id)
            .bind(user_id)
            .bind(&input.content)
            .bind(&input.position)
            .fetch_one(pool)
            .await
    }

    /// List comments on an idea in the order they were written.
    pub async fn list_by_idea(pool: &PgPool, idea_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE idea_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }
}
