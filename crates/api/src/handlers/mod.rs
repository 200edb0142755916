//! Request handlers for the catalog endpoints.
//!
//! Each submodule runs the same per-request pipeline: cancellation check,
//! filter parse, validation, one reference instant, then a single
//! repository call. Errors map to responses via [`crate::error::AppError`].

pub mod races;
pub mod sports_events;
