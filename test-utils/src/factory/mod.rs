//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let bug = factory::bug::create_bug(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let bug = factory::bug::BugFactory::new(&db)
//!     .title("Crash on save")
//!     .status("Resolved")
//!     .description("Only when the disk is full")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `bug` - Create bug entities

pub mod bug;
pub mod helpers;
