//! Race entity model.

use serde::Serialize;
use sqlx::FromRow;
use trackside_core::catalog::{EntityStatus, ListFilter};
use trackside_core::types::{DbId, Timestamp};

use crate::catalog::CatalogRecord;

/// Filter accepted by the race listing; categories are meeting ids.
pub type RaceFilter = ListFilter<DbId>;

/// A row from the `races` table, plus the derived lifecycle status.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Race {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    /// Derived at read time from `advertised_start_time`; never stored.
    #[sqlx(skip)]
    pub status: EntityStatus,
}

impl CatalogRecord for Race {
    fn advertised_start(&self) -> Timestamp {
        self.advertised_start_time
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
