//! Handlers for the `/sports-events` catalog (list + lookup).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use trackside_core::catalog::validate_entity_id;
use trackside_core::error::CoreError;
use trackside_core::types::DbId;
use trackside_db::models::sports_event::SportsEventFilter;
use trackside_db::repositories::SportsEventRepo;

use crate::error::{AppError, AppResult};
use crate::query::parse_label_list;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /sports-events`.
#[derive(Debug, Deserialize)]
pub struct ListSportsEventsParams {
    /// Comma-separated sport types, e.g. `?sport_types=tennis,soccer`.
    pub sport_types: Option<String>,
    pub visible_only: Option<bool>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<String>,
}

impl ListSportsEventsParams {
    fn into_filter(self) -> SportsEventFilter {
        let categories = match self.sport_types.as_deref() {
            Some(raw) => parse_label_list(raw),
            None => Vec::new(),
        };
        SportsEventFilter {
            categories,
            visible_only: self.visible_only,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        }
    }
}

/// GET /api/v1/sports-events
///
/// List sports events matching the filter. Statuses are derived against a
/// single reference instant captured at the start of the request.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListSportsEventsParams>,
) -> AppResult<impl IntoResponse> {
    state.ensure_accepting()?;

    let filter = params.into_filter();
    SportsEventRepo::validate(&filter)?;

    let now = Utc::now();
    let events = SportsEventRepo::list(&state.pool, &filter, now)
        .await
        .map_err(|e| AppError::storage("list_sports_events", e))?;

    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/sports-events/{id}
///
/// Look up a single sports event. Non-positive ids are rejected before any
/// storage access.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.ensure_accepting()?;
    validate_entity_id(id)?;

    let now = Utc::now();
    let event = SportsEventRepo::find_by_id(&state.pool, id, now)
        .await
        .map_err(|e| AppError::storage("get_sports_event", e))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SportsEvent",
            id,
        }))?;

    Ok(Json(DataResponse { data: event }))
}
