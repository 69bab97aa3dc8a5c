//! Requirement generation and listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ideabox_core::llm_model::LlmModel;
use ideabox_core::types::DbId;
use ideabox_db::models::requirement::{CreateRequirement, Requirement};
use ideabox_db::repositories::RequirementRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::ideas::find_owned_idea;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /requirements/generate`.
///
/// `llm_model` must be one of `openai`, `google`, `claude`; anything else is
/// rejected while the body is decoded.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub idea_id: DbId,
    pub llm_model: LlmModel,
}

/// POST /api/v1/requirements/generate
///
/// Ownership check, then one provider call, then one insert. A failure at
/// any step leaves nothing stored.
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<GenerateRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Requirement>>)> {
    let idea = find_owned_idea(&state, input.idea_id, &auth).await?;

    tracing::info!(
        idea_id = idea.id,
        user_id = auth.user_id,
        llm_model = %input.llm_model,
        "Generating requirement",
    );

    let content = state
        .generator
        .generate_requirement(&idea.title, &idea.content, input.llm_model)
        .await?;

    let requirement = RequirementRepo::record(
        &state.pool,
        &CreateRequirement {
            idea_id: idea.id,
            content,
            llm_model: input.llm_model,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: requirement }),
    ))
}

/// GET /api/v1/ideas/{id}/requirements
///
/// Stored requirements for an owned idea, newest first.
pub async fn list_for_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Requirement>>>> {
    find_owned_idea(&state, idea_id, &auth).await?;
    let requirements = RequirementRepo::list_by_idea(&state.pool, idea_id).await?;
    Ok(Json(DataResponse { data: requirements }))
}
