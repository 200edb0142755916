//! Shared query parameter helpers for catalog list endpoints.
//!
//! Both catalogs accept a comma-separated category list; the parsing
//! helpers live here to avoid duplication.

use trackside_core::types::DbId;

use crate::error::AppError;

/// Split a comma-separated id list (`?meeting_ids=1,5,9`).
///
/// Whitespace around entries is ignored. Text that does not parse as an
/// integer is a transport-level error; rule-level checks (positivity,
/// bounds, duplicates) belong to filter validation.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, AppError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("invalid id in list: {entry}")))
        })
        .collect()
}

/// Split a comma-separated label list (`?sport_types=tennis,soccer`).
///
/// Entries pass through untrimmed; per-value rules (emptiness, length,
/// duplicates) belong to filter validation.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(String::from).collect()
}
