use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::bug::BugRepository,
    error::AppError,
    model::bug::{Bug, CreateBugParam, DeleteBugParam, UpdateBugParam},
};

/// Message returned when an update or delete references an unknown bug.
pub const BUG_NOT_FOUND: &str = "Bug with provided ID does not exist";

pub struct BugService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BugService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every bug in creation order
    pub async fn list(&self) -> Result<Vec<Bug>, AppError> {
        let repo = BugRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new bug
    pub async fn create(&self, param: CreateBugParam) -> Result<Bug, AppError> {
        let repo = BugRepository::new(self.db);

        let bug = repo.create(param).await?;

        tracing::info!("Created bug {} ({})", bug.id, bug.title);

        Ok(bug)
    }

    /// Applies a partial update to an existing bug
    ///
    /// # Returns
    /// - `Ok(Bug)` - The updated bug
    /// - `Err(AppError::NoFieldsProvided)` - Param carries no field to change
    /// - `Err(AppError::NotFound)` - No bug exists with the provided ID
    pub async fn update(&self, param: UpdateBugParam) -> Result<Bug, AppError> {
        if !param.has_changes() {
            return Err(AppError::NoFieldsProvided);
        }

        let repo = BugRepository::new(self.db);

        repo.update(param).await.map_err(not_found_as_app_error)
    }

    /// Deletes a bug, returning its data
    ///
    /// # Returns
    /// - `Ok(Bug)` - The deleted bug
    /// - `Err(AppError::NotFound)` - No bug exists with the provided ID
    pub async fn delete(&self, param: DeleteBugParam) -> Result<Bug, AppError> {
        let repo = BugRepository::new(self.db);

        let bug = repo
            .delete(param.id)
            .await
            .map_err(not_found_as_app_error)?;

        tracing::info!("Deleted bug {} ({})", bug.id, bug.title);

        Ok(bug)
    }
}

/// Classifies the store's record-not-found signal; other failures stay internal.
fn not_found_as_app_error(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotFound(_) => AppError::NotFound(BUG_NOT_FOUND.to_string()),
        err => AppError::DbErr(err),
    }
}
