use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful procedure response envelope: `{ "result": { "data": ... } }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResultDto<T> {
    pub result: DataDto<T>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
}

impl<T> ResultDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            result: DataDto { data },
        }
    }
}

/// Failed procedure response envelope: `{ "error": { "message": ..., "code": ... } }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: ErrorBodyDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBodyDto {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>, code: &str) -> Self {
        Self {
            error: ErrorBodyDto {
                message: message.into(),
                code: Some(code.to_string()),
            },
        }
    }
}
