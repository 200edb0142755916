pub mod health;
pub mod races;
pub mod sports_events;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /races                 list
/// /races/{id}            lookup
/// /sports-events         list
/// /sports-events/{id}    lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/races", races::router())
        .nest("/sports-events", sports_events::router())
}
