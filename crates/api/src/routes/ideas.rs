//! Route definitions for the `/ideas` resource and its children.

use axum::routing::get;
use axum::Router;

use crate::handlers::{bookmarks, comments, ideas, requirements, shares};
use crate::state::AppState;

/// Routes mounted at `/ideas`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/details           -> details
/// GET    /{id}/requirements      -> requirements::list_for_idea
/// GET    /{id}/comments          -> comments::list
/// POST   /{id}/comments          -> comments::create
/// GET    /{id}/bookmarks         -> bookmarks::list
/// POST   /{id}/bookmarks         -> bookmarks::create
/// GET    /{id}/shares            -> shares::list
/// POST   /{id}/shares            -> shares::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas::list).post(ideas::create))
        .route(
            "/{id}",
            get(ideas::get_by_id)
                .put(ideas::update)
                .delete(ideas::delete),
        )
        .route("/{id}/details", get(ideas::details))
        .route("/{id}/requirements", get(requirements::list_for_idea))
        .route("/{id}/comments", get(comments::list).post(comments::create))
        .route(
            "/{id}/bookmarks",
            get(bookmarks::list).post(bookmarks::create),
        )
        .route("/{id}/shares", get(shares::list).post(shares::create))
}
