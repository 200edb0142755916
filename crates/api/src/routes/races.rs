//! Route definitions for the races catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::races;
use crate::state::AppState;

/// Routes mounted at `/races`.
///
/// ```text
/// GET /        -> list
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(races::list))
        .route("/{id}", get(races::get_by_id))
}
