//! Pure domain layer: shared types, the error taxonomy, and the catalog
//! filter primitives. No SQL, no I/O, no internal dependencies.

pub mod catalog;
pub mod error;
pub mod types;
