//! SeaORM entity definitions for the bug tracker database.
//!
//! The schema itself is owned by the `migration` crate; these entities mirror it
//! so the data layer can query the tables with typed models.

pub mod prelude;

pub mod bug;
