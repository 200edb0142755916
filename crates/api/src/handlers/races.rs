//! Handlers for the `/races` catalog (list + lookup).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use trackside_core::catalog::validate_entity_id;
use trackside_core::error::CoreError;
use trackside_core::types::DbId;
use trackside_db::models::race::RaceFilter;
use trackside_db::repositories::RaceRepo;

use crate::error::{AppError, AppResult};
use crate::query::parse_id_list;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /races`.
#[derive(Debug, Deserialize)]
pub struct ListRacesParams {
    /// Comma-separated meeting ids, e.g. `?meeting_ids=1,5,9`.
    pub meeting_ids: Option<String>,
    pub visible_only: Option<bool>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<String>,
}

impl ListRacesParams {
    fn into_filter(self) -> Result<RaceFilter, AppError> {
        let categories = match self.meeting_ids.as_deref() {
            Some(raw) => parse_id_list(raw)?,
            None => Vec::new(),
        };
        Ok(RaceFilter {
            categories,
            visible_only: self.visible_only,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        })
    }
}

/// GET /api/v1/races
///
/// List races matching the filter. Statuses are derived against a single
/// reference instant captured at the start of the request.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRacesParams>,
) -> AppResult<impl IntoResponse> {
    state.ensure_accepting()?;

    let filter = params.into_filter()?;
    RaceRepo::validate(&filter)?;

    let now = Utc::now();
    let races = RaceRepo::list(&state.pool, &filter, now)
        .await
        .map_err(|e| AppError::storage("list_races", e))?;

    Ok(Json(DataResponse { data: races }))
}

/// GET /api/v1/races/{id}
///
/// Look up a single race. Non-positive ids are rejected before any storage
/// access.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.ensure_accepting()?;
    validate_entity_id(id)?;

    let now = Utc::now();
    let race = RaceRepo::find_by_id(&state.pool, id, now)
        .await
        .map_err(|e| AppError::storage("get_race", e))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Race", id }))?;

    Ok(Json(DataResponse { data: race }))
}
