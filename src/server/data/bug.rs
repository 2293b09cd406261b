//! Bug data repository for database operations
//!
//! Provides the `BugRepository` for managing bugs in the database and converts
//! entity models into domain models for usage within services & controllers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use crate::server::model::bug::{Bug, CreateBugParam, UpdateBugParam};

/// Repository providing database operations for bug management.
pub struct BugRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BugRepository<'a> {
    /// Creates a new BugRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every bug in creation order
    ///
    /// # Returns
    /// - `Ok(Vec<Bug>)` - All bugs ordered by ascending ID, empty if there are none
    /// - `Err(DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<Bug>, DbErr> {
        let bugs = entity::prelude::Bug::find()
            .order_by_asc(entity::bug::Column::Id)
            .all(self.db)
            .await?;

        Ok(bugs.into_iter().map(Bug::from_entity).collect())
    }

    /// Finds a bug by ID
    ///
    /// # Returns
    /// - `Ok(Some(Bug))` - The requested bug if found
    /// - `Ok(None)` - No bug exists with the provided ID
    /// - `Err(DbErr)` - Database error during select
    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bug>, DbErr> {
        let bug = entity::prelude::Bug::find_by_id(id).one(self.db).await?;

        Ok(bug.map(Bug::from_entity))
    }

    /// Creates a new bug, stamping its creation time
    ///
    /// # Returns
    /// - `Ok(Bug)` - The created bug including its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBugParam) -> Result<Bug, DbErr> {
        let bug = entity::bug::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bug::from_entity(bug))
    }

    /// Applies the provided fields to an existing bug
    ///
    /// The lookup and the update run in one transaction so the bug cannot disappear
    /// between them.
    ///
    /// # Returns
    /// - `Ok(Bug)` - The updated bug
    /// - `Err(DbErr::RecordNotFound)` - No bug exists with the provided ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateBugParam) -> Result<Bug, DbErr> {
        let txn = self.db.begin().await?;

        let bug = entity::prelude::Bug::find_by_id(param.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Bug with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::bug::ActiveModel = bug.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status);
        }

        let bug = active_model.update(&txn).await?;
        txn.commit().await?;

        Ok(Bug::from_entity(bug))
    }

    /// Deletes the bug of the provided ID
    ///
    /// # Returns
    /// - `Ok(Bug)` - The bug as it was before deletion
    /// - `Err(DbErr::RecordNotFound)` - No bug exists with the provided ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Bug, DbErr> {
        let txn = self.db.begin().await?;

        let bug = entity::prelude::Bug::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Bug with id {} not found", id)))?;

        entity::prelude::Bug::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Bug::from_entity(bug))
    }
}
