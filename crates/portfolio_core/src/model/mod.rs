//! Portfolio domain model.
//!
//! # Responsibility
//! - Define canonical data structures shared by the catalog, the filter
//!   engine and view projections.
//!
//! # Invariants
//! - Records are plain immutable values once placed in a catalog.
//! - Display keys come from `ProjectId`, never from titles.

pub mod project;
