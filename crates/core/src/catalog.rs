//! Catalog filter primitives (sort direction, per-value rules, derived
//! status).
//!
//! This module lives in `core` (zero internal deps) so the same filter model
//! can be used by the repository layer and the HTTP handlers.

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Filter limits
// ---------------------------------------------------------------------------

/// Maximum number of numeric category ids allowed in a single filter.
pub const MAX_CATEGORY_IDS: usize = 100;

/// Maximum value for a single numeric category id.
pub const MAX_CATEGORY_ID: DbId = 999_999;

/// Maximum number of string category labels allowed in a single filter.
pub const MAX_CATEGORY_LABELS: usize = 50;

/// Maximum length (after trimming) for a string category label.
pub const MAX_CATEGORY_LABEL_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Filter model
// ---------------------------------------------------------------------------

/// Caller-supplied constraints and sort preferences for a list request.
///
/// `C` is the catalog's category value type: meeting ids (`i64`) for races,
/// sport types (`String`) for sports events. The default (all fields absent)
/// is always valid and yields the unrestricted, default-sorted listing.
#[derive(Debug, Clone)]
pub struct ListFilter<C> {
    /// Category membership restriction; empty means no restriction.
    pub categories: Vec<C>,
    /// `Some(true)` restricts to visible records; anything else does not.
    pub visible_only: Option<bool>,
    /// Sort field name; validated against the catalog's declared set.
    pub sort_field: Option<String>,
    /// `asc` or `desc` (case-insensitive); absent means ascending.
    pub sort_direction: Option<String>,
}

impl<C> Default for ListFilter<C> {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            visible_only: None,
            sort_field: None,
            sort_direction: None,
        }
    }
}

impl<C> ListFilter<C> {
    /// Resolve the effective sort direction.
    ///
    /// Descending only when explicitly requested; ascending otherwise,
    /// including for values the parser does not recognize (validation
    /// rejects those before they reach the query builder).
    pub fn direction(&self) -> SortDirection {
        self.sort_direction
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction name, case-insensitively. Unknown names are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// The ORDER BY keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Category value rules
// ---------------------------------------------------------------------------

/// A value usable as a catalog's category dimension.
///
/// Implementations carry the per-value validity rules and the canonical form
/// used for duplicate detection.
pub trait CategoryValue {
    /// Canonical form for duplicate detection and error reporting.
    /// String labels are trimmed first; ids render as decimal.
    fn canonical(&self) -> String;

    /// Check this value against the dimension's validity rules.
    fn check(&self, dimension: &'static str, position: usize) -> Result<(), ValidationError>;
}

impl CategoryValue for DbId {
    fn canonical(&self) -> String {
        self.to_string()
    }

    fn check(&self, dimension: &'static str, position: usize) -> Result<(), ValidationError> {
        if *self <= 0 {
            return Err(ValidationError::ValueNotPositive {
                dimension,
                position,
                value: *self,
            });
        }
        if *self > MAX_CATEGORY_ID {
            return Err(ValidationError::ValueTooLarge {
                dimension,
                position,
                value: *self,
                max: MAX_CATEGORY_ID,
            });
        }
        Ok(())
    }
}

impl CategoryValue for String {
    fn canonical(&self) -> String {
        self.trim().to_string()
    }

    fn check(&self, dimension: &'static str, position: usize) -> Result<(), ValidationError> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyValue {
                dimension,
                position,
            });
        }
        if trimmed.len() > MAX_CATEGORY_LABEL_LEN {
            return Err(ValidationError::ValueTooLong {
                dimension,
                position,
                len: trimmed.len(),
                max: MAX_CATEGORY_LABEL_LEN,
            });
        }
        Ok(())
    }
}

/// Validate an id passed to a get-by-id operation.
///
/// Rejected ids never reach storage.
pub fn validate_entity_id(id: DbId) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId { id });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Derived status
// ---------------------------------------------------------------------------

/// Derived lifecycle state of a catalog entity. Computed at read time,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityStatus {
    #[default]
    Open,
    Closed,
}

/// Derive an entity's status against a reference instant.
///
/// `Closed` iff the advertised start is strictly before `reference_now`;
/// a start equal to the reference instant is still `Open`. The reference
/// instant is captured once per request and reused for every record in the
/// same response.
pub fn derive_status(advertised_start: Timestamp, reference_now: Timestamp) -> EntityStatus {
    if advertised_start < reference_now {
        EntityStatus::Closed
    } else {
        EntityStatus::Open
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use super::*;

    // -- SortDirection -------------------------------------------------------

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("Desc"), Some(SortDirection::Desc));
    }

    #[test]
    fn direction_rejects_unknown_names() {
        assert_eq!(SortDirection::parse("descending"), None);
        assert_eq!(SortDirection::parse(""), None);
    }

    #[test]
    fn filter_direction_defaults_to_ascending() {
        let filter: ListFilter<DbId> = ListFilter::default();
        assert_eq!(filter.direction(), SortDirection::Asc);

        let filter = ListFilter::<DbId> {
            sort_direction: Some("desc".into()),
            ..Default::default()
        };
        assert_eq!(filter.direction(), SortDirection::Desc);
    }

    // -- numeric category rules ----------------------------------------------

    #[test]
    fn numeric_category_must_be_positive() {
        assert_matches!(
            0i64.check("meeting_ids", 3),
            Err(ValidationError::ValueNotPositive { position: 3, .. })
        );
        assert_matches!(
            (-7i64).check("meeting_ids", 0),
            Err(ValidationError::ValueNotPositive { value: -7, .. })
        );
    }

    #[test]
    fn numeric_category_bounded_above() {
        assert!(MAX_CATEGORY_ID.check("meeting_ids", 0).is_ok());
        assert_matches!(
            (MAX_CATEGORY_ID + 1).check("meeting_ids", 1),
            Err(ValidationError::ValueTooLarge { position: 1, .. })
        );
    }

    // -- string category rules -----------------------------------------------

    #[test]
    fn label_category_must_be_nonempty_after_trim() {
        assert_matches!(
            "   ".to_string().check("sport_types", 2),
            Err(ValidationError::EmptyValue { position: 2, .. })
        );
        assert!("tennis".to_string().check("sport_types", 0).is_ok());
    }

    #[test]
    fn label_category_bounded_length() {
        let long = "x".repeat(MAX_CATEGORY_LABEL_LEN + 1);
        assert_matches!(
            long.check("sport_types", 0),
            Err(ValidationError::ValueTooLong { .. })
        );
        // Surrounding whitespace does not count toward the limit.
        let padded = format!("  {}  ", "x".repeat(MAX_CATEGORY_LABEL_LEN));
        assert!(padded.check("sport_types", 0).is_ok());
    }

    #[test]
    fn label_canonical_form_is_trimmed() {
        assert_eq!(" tennis ".to_string().canonical(), "tennis");
    }

    // -- entity id -----------------------------------------------------------

    #[test]
    fn entity_id_must_be_positive() {
        assert!(validate_entity_id(1).is_ok());
        assert_matches!(
            validate_entity_id(0),
            Err(ValidationError::InvalidId { id: 0 })
        );
        assert_matches!(
            validate_entity_id(-42),
            Err(ValidationError::InvalidId { id: -42 })
        );
    }

    // -- derived status ------------------------------------------------------

    #[test]
    fn status_open_when_start_equals_reference_instant() {
        let now = Utc::now();
        assert_eq!(derive_status(now, now), EntityStatus::Open);
    }

    #[test]
    fn status_closed_one_microsecond_before_reference_instant() {
        let now = Utc::now();
        let start = now - Duration::microseconds(1);
        assert_eq!(derive_status(start, now), EntityStatus::Closed);
    }

    #[test]
    fn status_open_for_future_start() {
        let now = Utc::now();
        assert_eq!(
            derive_status(now + Duration::hours(1), now),
            EntityStatus::Open
        );
    }
}
