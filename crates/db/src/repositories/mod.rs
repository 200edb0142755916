//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&DbPool` as the first argument. Both repositories are thin
//! instantiations of the generic catalog engine in [`crate::catalog`].

pub mod race_repo;
pub mod sports_event_repo;

pub use race_repo::RaceRepo;
pub use sports_event_repo::SportsEventRepo;
