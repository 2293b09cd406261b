//! Bug factory for creating test bug entities.
//!
//! This module provides factory methods for creating bug entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test bugs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bug::BugFactory;
///
/// let bug = BugFactory::new(&db)
///     .title("Login button unresponsive")
///     .status("Open")
///     .build()
///     .await?;
/// ```
pub struct BugFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    status: String,
}

impl<'a> BugFactory<'a> {
    /// Creates a new BugFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Bug {id}"` where id is auto-incremented
    /// - description: `None`
    /// - status: `"Active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Bug {}", id),
            description: None,
            status: "Active".to_string(),
        }
    }

    /// Sets the bug title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the bug description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the bug status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the bug entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bug::Model)` - Created bug entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bug::Model, DbErr> {
        entity::bug::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bug with default values.
///
/// Shorthand for `BugFactory::new(db).build().await`.
pub async fn create_bug(db: &DatabaseConnection) -> Result<entity::bug::Model, DbErr> {
    BugFactory::new(db).build().await
}
