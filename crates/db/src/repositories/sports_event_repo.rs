//! Repository for the `sports_events` catalog.

use trackside_core::catalog::MAX_CATEGORY_LABELS;
use trackside_core::error::ValidationError;
use trackside_core::types::{DbId, Timestamp};

use crate::catalog::CatalogSchema;
use crate::models::sports_event::{SportsEvent, SportsEventFilter};
use crate::DbPool;

/// Column list for the `sports_events` table.
const COLUMNS: &str = "id, name, advertised_start_time, sport_type, venue, visible";

/// Wires the `sports_events` table into the generic catalog engine.
static SPORTS_EVENTS: CatalogSchema = CatalogSchema {
    table: "sports_events",
    columns: COLUMNS,
    dimension: "sport_types",
    category_column: "sport_type",
    max_categories: MAX_CATEGORY_LABELS,
    sort_columns: &[
        ("advertised_start_time", "advertised_start_time"),
        ("name", "name"),
        ("sport_type", "sport_type"),
    ],
    default_sort_column: "advertised_start_time",
};

/// Read-only access to the sports events catalog.
pub struct SportsEventRepo;

impl SportsEventRepo {
    /// Validate a list filter against the sports event catalog rules.
    pub fn validate(filter: &SportsEventFilter) -> Result<(), ValidationError> {
        SPORTS_EVENTS.validate(filter)
    }

    /// List events matching `filter`, with statuses derived at `now`.
    pub async fn list(
        pool: &DbPool,
        filter: &SportsEventFilter,
        now: Timestamp,
    ) -> Result<Vec<SportsEvent>, sqlx::Error> {
        SPORTS_EVENTS.fetch_list(pool, filter, now).await
    }

    /// Find a single event by id. Returns `None` when no row matches.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<SportsEvent>, sqlx::Error> {
        SPORTS_EVENTS.fetch_by_id(pool, id, now).await
    }
}
