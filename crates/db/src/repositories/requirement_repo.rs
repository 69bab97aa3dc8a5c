//! Repository for the `requirements` table.
//!
//! Insert-only. Rows are written after a successful generation and are
//! never updated; they disappear only when their idea is deleted.

use ideabox_core::types::DbId;
use sqlx::PgPool;

use crate::models::requirement::{CreateRequirement, Requirement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, idea_id, content, llm_model, created_at";

/// Stores generated requirements documents.
pub struct RequirementRepo;

impl RequirementRepo {
    /// Append a new requirement for an idea. `created_at` is assigned by the server.
    ///
    /// Single-statement insert: it either commits fully or leaves no row.
    pub async fn record(
        pool: &PgPool,
        input: &CreateRequirement,
    ) -> Result<Requirement, sqlx::Error> {
        let query = format!(
            "INSERT INTO requirements (idea_id, content, llm_model)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let requirement = sqlx::query_as::<_, Requirement>(&query)
            .bind(input.idea_id)
            .bind(&input.content)
            .bind(input.llm_model.as_str())
            .fetch_one(pool)
            .await?;

        tracing::debug!(
            requirement_id = requirement.id,
            idea_id = requirement.idea_id,
            llm_model = %requirement.llm_model,
            "Requirement recorded",
        );
        Ok(requirement)
    }

    /// List all requirements generated for an idea, newest first.
    pub async fn list_by_idea(
        pool: &PgPool,
        idea_id: DbId,
    ) -> Result<Vec<Requirement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requirements
             WHERE idea_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Requirement>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }

    /// Count requirements attached to an idea.
    pub async fn count_by_idea(pool: &PgPool, idea_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM requirements WHERE idea_id = $1")
            .bind(idea_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
