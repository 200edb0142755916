//! Repository for the `races` catalog.

use trackside_core::catalog::MAX_CATEGORY_IDS;
use trackside_core::error::ValidationError;
use trackside_core::types::{DbId, Timestamp};

use crate::catalog::CatalogSchema;
use crate::models::race::{Race, RaceFilter};
use crate::DbPool;

/// Column list for the `races` table.
const COLUMNS: &str = "id, meeting_id, name, number, visible, advertised_start_time";

/// Wires the `races` table into the generic catalog engine.
static RACES: CatalogSchema = CatalogSchema {
    table: "races",
    columns: COLUMNS,
    dimension: "meeting_ids",
    category_column: "meeting_id",
    max_categories: MAX_CATEGORY_IDS,
    sort_columns: &[
        ("advertised_start_time", "advertised_start_time"),
        ("name", "name"),
        ("number", "number"),
    ],
    default_sort_column: "advertised_start_time",
};

/// Read-only access to the races catalog.
pub struct RaceRepo;

impl RaceRepo {
    /// Validate a list filter against the race catalog rules.
    pub fn validate(filter: &RaceFilter) -> Result<(), ValidationError> {
        RACES.validate(filter)
    }

    /// List races matching `filter`, with statuses derived at `now`.
    pub async fn list(
        pool: &DbPool,
        filter: &RaceFilter,
        now: Timestamp,
    ) -> Result<Vec<Race>, sqlx::Error> {
        RACES.fetch_list(pool, filter, now).await
    }

    /// Find a single race by id. Returns `None` when no row matches.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<Race>, sqlx::Error> {
        RACES.fetch_by_id(pool, id, now).await
    }
}
