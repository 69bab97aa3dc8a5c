//! Bookmarks on an owned idea.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ideabox_core::error::CoreError;
use ideabox_core::types::DbId;
use ideabox_db::models::bookmark::{Bookmark, CreateBookmark};
use ideabox_db::repositories::BookmarkRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ideas::find_owned_idea;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/ideas/{id}/bookmarks
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Bookmark>>>> {
    find_owned_idea(&state, idea_id, &auth).await?;
    let bookmarks = BookmarkRepo::list_by_idea(&state.pool, idea_id).await?;
    Ok(Json(DataResponse { data: bookmarks }))
}

/// POST /api/v1/ideas/{id}/bookmarks
///
/// `position` is an opaque client anchor but must not be `null`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(idea_id): Path<DbId>,
    Json(input): Json<CreateBookmark>,
) -> AppResult<(StatusCode, Json<DataResponse<Bookmark>>)> {
    find_owned_idea(&state, idea_id, &auth).await?;

    if input.position.is_null() {
        return Err(AppError::Core(CoreError::Validation(
            "Bookmark position is required".into(),
        )));
    }

    let bookmark = BookmarkRepo::create(&state.pool, idea_id, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: bookmark })))
}
