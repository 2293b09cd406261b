//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into RPC error envelopes. The `AppError` enum is the closed set
//! of failures a procedure can produce; each variant maps to exactly one HTTP status
//! and error code in `IntoResponse`, so call sites never pick status codes themselves.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::config::ConfigError, validation::ValidationError},
};

/// Error code sent with 400 responses.
pub const BAD_REQUEST: &str = "BAD_REQUEST";
/// Error code sent with 404 responses.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// Error code sent with 405 responses.
pub const METHOD_NOT_SUPPORTED: &str = "METHOD_NOT_SUPPORTED";
/// Error code sent with 500 responses.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Top-level application error type.
///
/// Domain failures (`InvalidInput`, `NoFieldsProvided`, `NotFound`) carry messages meant
/// for the caller. Everything else is an internal failure: the details are logged and the
/// caller only sees a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM that was not classified as a domain error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Procedure payload failed validation.
    ///
    /// Results in 400 Bad Request; the message names the rejected field.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Update called without any field to change.
    ///
    /// Results in 400 Bad Request.
    #[error("At least one of title, description or status must be provided")]
    NoFieldsProvided,

    /// Referenced record does not exist.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// No procedure is registered under the requested path.
    ///
    /// Results in 404 Not Found.
    #[error("No procedure found on path \"{0}\"")]
    ProcedureNotFound(String),

    /// Procedure exists but was called with the wrong HTTP method.
    ///
    /// Results in 405 Method Not Allowed.
    #[error("Unsupported {0} request to procedure")]
    MethodNotSupported(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status and error code this error is reported with.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidInput(_) | Self::NoFieldsProvided => (StatusCode::BAD_REQUEST, BAD_REQUEST),
            Self::NotFound(_) | Self::ProcedureNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND),
            Self::MethodNotSupported(_) => (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_SUPPORTED),
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::IoErr(_)
            | Self::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        }
    }
}

/// Converts application errors into RPC error envelopes.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput` and `NoFieldsProvided`
/// - 404 Not Found - For `NotFound` and `ProcedureNotFound`
/// - 405 Method Not Allowed - For `MethodNotSupported`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return InternalServerError(self).into_response();
        }

        (status, Json(ErrorDto::new(self.to_string(), code))).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error", INTERNAL_SERVER_ERROR)),
        )
            .into_response()
    }
}
