use axum::routing::post;
use axum::Router;

use crate::handlers::requirements;
use crate::state::AppState;

/// Routes mounted at `/requirements`.
///
/// ```text
/// POST /generate   -> generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(requirements::generate))
}
