use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request cancelled before processing began")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A filter or id failed one of the catalog validation rules.
///
/// One variant per rule so callers can report the specific violation
/// verbatim. Positions are zero-based indexes into the submitted list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("too many {dimension}: got {got}, max allowed {max}")]
    TooManyValues {
        dimension: &'static str,
        got: usize,
        max: usize,
    },

    #[error("invalid value in {dimension} at position {position}: {value} (must be positive)")]
    ValueNotPositive {
        dimension: &'static str,
        position: usize,
        value: i64,
    },

    #[error("value too large in {dimension} at position {position}: {value} (max: {max})")]
    ValueTooLarge {
        dimension: &'static str,
        position: usize,
        value: i64,
        max: i64,
    },

    #[error("empty value in {dimension} at position {position}")]
    EmptyValue {
        dimension: &'static str,
        position: usize,
    },

    #[error("value too long in {dimension} at position {position}: {len} characters (max: {max})")]
    ValueTooLong {
        dimension: &'static str,
        position: usize,
        len: usize,
        max: usize,
    },

    #[error("duplicate value in {dimension}: {value} (position {position})")]
    DuplicateValue {
        dimension: &'static str,
        position: usize,
        value: String,
    },

    #[error("invalid sort field: {field}")]
    InvalidSortField { field: String },

    #[error("invalid sort direction: {direction}")]
    InvalidSortDirection { direction: String },

    #[error("invalid id: {id} (must be positive)")]
    InvalidId { id: DbId },
}
