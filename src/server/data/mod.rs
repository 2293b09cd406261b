//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) using SeaORM entity models internally
//! and return domain models to keep the data layer separate from business logic. All
//! database queries, inserts, updates, and deletes are performed through these repositories.

pub mod bug;
