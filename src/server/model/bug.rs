//! Domain & parameter models for bug operations
//!
//! Defines the bug domain model, the parameter models for each mutation, and the
//! conversions from the deserialized procedure DTOs into those parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::bug::{BugDto, CreateBugDto, DeleteBugDto, UpdateBugDto},
    server::{
        error::AppError,
        validation::{non_empty, trimmed},
    },
};

/// The bug domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Bug {
    /// Converts an entity model to the bug domain model
    pub fn from_entity(entity: entity::bug::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BugDto {
        BugDto {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new bug
///
/// `title` and `status` are trimmed and non-empty; `description` is trimmed if present.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBugParam {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

impl TryFrom<CreateBugDto> for CreateBugParam {
    type Error = AppError;

    fn try_from(dto: CreateBugDto) -> Result<Self, Self::Error> {
        Ok(Self {
            title: non_empty("title", dto.title)?,
            description: trimmed(dto.description),
            status: non_empty("status", dto.status)?,
        })
    }
}

/// Parameters for a partial update of an existing bug
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBugParam {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl UpdateBugParam {
    /// Whether the update would change at least one field.
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.status.is_some()
    }
}

impl TryFrom<UpdateBugDto> for UpdateBugParam {
    type Error = AppError;

    fn try_from(dto: UpdateBugDto) -> Result<Self, Self::Error> {
        let param = Self {
            id: dto.id,
            title: dto.title.map(|title| non_empty("title", title)).transpose()?,
            description: trimmed(dto.description),
            status: dto
                .status
                .map(|status| non_empty("status", status))
                .transpose()?,
        };

        if !param.has_changes() {
            return Err(AppError::NoFieldsProvided);
        }

        Ok(param)
    }
}

/// Parameters identifying the bug to delete
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteBugParam {
    pub id: i32,
}

impl DeleteBugParam {
    pub fn from_dto(dto: DeleteBugDto) -> Self {
        Self { id: dto.id }
    }
}
