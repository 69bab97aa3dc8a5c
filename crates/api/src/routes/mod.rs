pub mod auth;
pub mod health;
pub mod ideas;
pub mod requirements;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                          login (public)
///
/// /users                               register (public)
/// /users/me                            current user
///
/// /ideas                               list, create
/// /ideas/{id}                          get, update, delete
/// /ideas/{id}/details                  idea with requirements, comments, bookmarks
/// /ideas/{id}/requirements             list generated requirements
/// /ideas/{id}/comments                 list, create
/// /ideas/{id}/bookmarks                list, create
/// /ideas/{id}/shares                   list, create
///
/// /requirements/generate               generate and store (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/ideas", ideas::router())
        .nest("/requirements", requirements::router())
}
