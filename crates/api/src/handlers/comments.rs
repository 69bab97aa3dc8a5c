//! Comments on an owned idea.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ideabox_core::ideas::validate_comment;
use ideabox_core::types::DbId;
use ideabox_db::models::comment::{Comment, CreateComment};
use ideabox_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::handlers::ideas::find_owned_idea;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ideas/{id}/comments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    find_owned_idea(&state, idea_id, &auth).await?;
    let comments = CommentRepo::list_by_idea(&state.pool, idea_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/ideas/{id}/comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    find_owned_idea(&state, idea_id, &auth).await?;
    validate_comment(&input.content)?;

    let comment = CommentRepo::create(&state.pool, idea_id, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
