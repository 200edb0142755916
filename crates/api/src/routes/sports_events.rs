//! Route definitions for the sports events catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::sports_events;
use crate::state::AppState;

/// Routes mounted at `/sports-events`.
///
/// ```text
/// GET /        -> list
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sports_events::list))
        .route("/{id}", get(sports_events::get_by_id))
}
