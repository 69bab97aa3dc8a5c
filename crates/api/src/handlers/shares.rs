//! Share links for an owned idea.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ideabox_core::error::CoreError;
use ideabox_core::types::DbId;
use ideabox_db::models::share::{CreateShare, Share};
use ideabox_db::repositories::ShareRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ideas::find_owned_idea;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ideas/{id}/shares
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Share>>>> {
    find_owned_idea(&state, idea_id, &auth).await?;
    let shares = ShareRepo::list_by_idea(&state.pool, idea_id).await?;
    Ok(Json(DataResponse { data: shares }))
}

/// POST /api/v1/ideas/{id}/shares
///
/// Issues a new random share token.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
    Json(input): Json<CreateShare>,
) -> AppResult<(StatusCode, Json<DataResponse<Share>>)> {
    find_owned_idea(&state, idea_id, &auth).await?;

    if input.expires_at.is_some_and(|at| at <= Utc::now()) {
        return Err(AppError::Core(CoreError::Validation(
            "Share expiry must be in the future".into(),
        )));
    }

    let share = ShareRepo::create(&state.pool, idea_id, &input).await?;
    tracing::info!(idea_id, share_id = share.id, "Share link created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: share })))
}
