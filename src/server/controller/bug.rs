use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        bug::{BugDto, CreateBugDto, DeleteBugDto, UpdateBugDto},
    },
    server::{
        controller::procedure::{Namespace, RpcInput},
        error::AppError,
        model::bug::{Bug, CreateBugParam, DeleteBugParam, UpdateBugParam},
        service::bug::BugService,
        state::AppState,
    },
};

/// Tag for grouping bug procedures in OpenAPI documentation
pub static BUG_TAG: &str = "bugs";

/// Procedures of the `bugs` namespace.
pub fn procedures() -> Router<AppState> {
    Namespace::new(BUG_TAG)
        .query("getBugs", get_bugs)
        .mutation("createBug", create_bug)
        .mutation("updateBug", update_bug)
        .mutation("deleteBug", delete_bug)
        .into_router()
}

/// List every bug.
///
/// Returns all stored bugs in creation order. Takes no input.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All bugs (possibly none) as `result.data`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/trpc/bugs.getBugs",
    tag = BUG_TAG,
    responses(
        (status = 200, description = "All bugs in creation order", body = ResultDto<Vec<BugDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bugs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bugs = BugService::new(&state.db).list().await?;

    let dto: Vec<BugDto> = bugs.into_iter().map(Bug::into_dto).collect();

    Ok((StatusCode::OK, Json(ResultDto::new(dto))))
}

/// Create a new bug.
///
/// Trims the provided fields and stores the bug with the current time as its
/// creation timestamp.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Bug data; `title` and `status` must be non-empty after trimming
///
/// # Returns
/// - `200 OK` - The created bug including its assigned ID
/// - `400 Bad Request` - Malformed payload, or missing/empty `title` or `status`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/trpc/bugs.createBug",
    tag = BUG_TAG,
    request_body = CreateBugDto,
    responses(
        (status = 200, description = "Created bug", body = ResultDto<BugDto>),
        (status = 400, description = "Invalid bug data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bug(
    State(state): State<AppState>,
    RpcInput(payload): RpcInput<CreateBugDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateBugParam::try_from(payload)?;

    let bug = BugService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(bug.into_dto()))))
}

/// Update fields of an existing bug.
///
/// Only the provided fields change; at least one of `title`, `description` or `status`
/// must be present.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Bug ID and the fields to change
///
/// # Returns
/// - `200 OK` - The bug after the update
/// - `400 Bad Request` - Malformed payload, empty field, or nothing to update
/// - `404 Not Found` - No bug exists with the provided ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/trpc/bugs.updateBug",
    tag = BUG_TAG,
    request_body = UpdateBugDto,
    responses(
        (status = 200, description = "Updated bug", body = ResultDto<BugDto>),
        (status = 400, description = "Invalid bug data or no fields to update", body = ErrorDto),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bug(
    State(state): State<AppState>,
    RpcInput(payload): RpcInput<UpdateBugDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateBugParam::try_from(payload)?;

    let bug = BugService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(bug.into_dto()))))
}

/// Delete a bug.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - ID of the bug to delete
///
/// # Returns
/// - `200 OK` - The bug as it was before deletion
/// - `400 Bad Request` - Missing or non-integer ID
/// - `404 Not Found` - No bug exists with the provided ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/trpc/bugs.deleteBug",
    tag = BUG_TAG,
    request_body = DeleteBugDto,
    responses(
        (status = 200, description = "Deleted bug", body = ResultDto<BugDto>),
        (status = 400, description = "Invalid bug ID", body = ErrorDto),
        (status = 404, description = "Bug not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bug(
    State(state): State<AppState>,
    RpcInput(payload): RpcInput<DeleteBugDto>,
) -> Result<impl IntoResponse, AppError> {
    let bug = BugService::new(&state.db)
        .delete(DeleteBugParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::new(bug.into_dto()))))
}
