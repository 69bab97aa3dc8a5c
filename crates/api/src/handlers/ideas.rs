//! Handlers for the `/ideas` resource.
//!
//! Every handler that takes an idea id resolves it through
//! [`find_owned_idea`] before doing anything else.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ideabox_core::error::CoreError;
use ideabox_core::ideas::{clamp_limit, clamp_offset, validate_content, validate_title};
use ideabox_core::ownership::authorize;
use ideabox_core::types::DbId;
use ideabox_db::models::idea::{CreateIdea, Idea, IdeaWithDetails, UpdateIdea};
use ideabox_db::repositories::{BookmarkRepo, CommentRepo, IdeaRepo, RequirementRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load an idea and verify the caller owns it.
///
/// Returns 404 if the idea does not exist and 403 if it belongs to someone
/// else. Child resources (requirements, comments, bookmarks, shares) use
/// this too: their access follows the owning idea.
pub(crate) async fn find_owned_idea(
    state: &AppState,
    idea_id: DbId,
    auth: &AuthUser,
) -> AppResult<Idea> {
    authorize("Idea", idea_id, auth.user_id, |id| {
        IdeaRepo::find_by_id(&state.pool, id)
    })
    .await
}

/// GET /api/v1/ideas?skip=&limit=
///
/// The caller's own ideas, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Idea>>>> {
    let ideas = IdeaRepo::list_by_owner(
        &state.pool,
        auth.user_id,
        clamp_limit(params.limit),
        clamp_offset(params.skip),
    )
    .await?;
    Ok(Json(DataResponse { data: ideas }))
}

/// POST /api/v1/ideas
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateIdea>,
) -> AppResult<(StatusCode, Json<DataResponse<Idea>>)> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;

    let idea = IdeaRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(idea_id = idea.id, user_id = auth.user_id, "Idea created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: idea })))
}

/// GET /api/v1/ideas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Idea>>> {
    let idea = find_owned_idea(&state, id, &auth).await?;
    Ok(Json(DataResponse { data: idea }))
}

/// PUT /api/v1/ideas/{id}
///
/// Only the fields present in the body are changed.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIdea>,
) -> AppResult<Json<DataResponse<Idea>>> {
    find_owned_idea(&state, id, &auth).await?;

    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let idea = IdeaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))?;
    Ok(Json(DataResponse { data: idea }))
}

/// DELETE /api/v1/ideas/{id}
///
/// Removes the idea and everything attached to it.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned_idea(&state, id, &auth).await?;

    if IdeaRepo::delete(&state.pool, id).await? {
        tracing::info!(idea_id = id, user_id = auth.user_id, "Idea deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Idea", id }))
    }
}

/// GET /api/v1/ideas/{id}/details
///
/// The idea together with its requirements, comments and bookmarks.
pub async fn details(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<IdeaWithDetails>>> {
    let idea = find_owned_idea(&state, id, &auth).await?;

    let (requirements, comments, bookmarks) = tokio::try_join!(
        RequirementRepo::list_by_idea(&state.pool, id),
        CommentRepo::list_by_idea(&state.pool, id),
        BookmarkRepo::list_by_idea(&state.pool, id),
    )?;

    Ok(Json(DataResponse {
        data: IdeaWithDetails {
            idea,
            requirements,
            comments,
            bookmarks,
        },
    }))
}
