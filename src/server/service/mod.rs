//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data (repository) layer. They
//! enforce operation preconditions, call exactly one repository operation per
//! procedure, and translate data-store failures into typed `AppError`s.

pub mod bug;
