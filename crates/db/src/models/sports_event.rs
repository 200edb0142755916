//! Sports event entity model.

use serde::Serialize;
use sqlx::FromRow;
use trackside_core::catalog::{EntityStatus, ListFilter};
use trackside_core::types::{DbId, Timestamp};

use crate::catalog::CatalogRecord;

/// Filter accepted by the sports event listing; categories are sport types.
pub type SportsEventFilter = ListFilter<String>;

/// A row from the `sports_events` table, plus the derived lifecycle status.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SportsEvent {
    pub id: DbId,
    pub name: String,
    pub advertised_start_time: Timestamp,
    pub sport_type: String,
    pub venue: String,
    pub visible: bool,
    /// Derived at read time from `advertised_start_time`; never stored.
    #[sqlx(skip)]
    pub status: EntityStatus,
}

impl CatalogRecord for SportsEvent {
    fn advertised_start(&self) -> Timestamp {
        self.advertised_start_time
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
