//! Validation of procedure input.
//!
//! Procedure payloads are deserialized straight into their wire DTOs, so the types
//! documented in the OpenAPI schema are the types that are enforced. `parse_payload`
//! reports the path of the rejected field. Constraints serde cannot express (trimmed,
//! non-empty strings) are checked while a DTO is converted into its service parameter.

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

/// Reasons a procedure payload is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request body could not be parsed as JSON.
    #[error("Input is not valid JSON: {0}")]
    MalformedJson(String),

    /// Body is valid JSON but does not match the procedure's input type.
    ///
    /// The message is prefixed with the path of the offending field when there is one,
    /// e.g. `status: invalid type: integer ...`.
    #[error("{0}")]
    InvalidShape(String),

    /// A string field is empty after trimming surrounding whitespace.
    #[error("{field} must contain at least 1 character")]
    Empty { field: &'static str },
}

/// Deserializes a raw request body into the procedure's input type.
///
/// An empty or whitespace-only body is read as `{}`, so a procedure whose fields are all
/// optional accepts a bare request.
///
/// # Returns
/// - `Ok(T)` - The deserialized payload
/// - `Err(ValidationError::MalformedJson)` - Body is not syntactically valid JSON
/// - `Err(ValidationError::InvalidShape)` - A field is missing or does not fit its type
pub fn parse_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let payload = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        match e.inner().classify() {
            Category::Data => ValidationError::InvalidShape(e.to_string()),
            _ => ValidationError::MalformedJson(e.inner().to_string()),
        }
    })?;

    deserializer
        .end()
        .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    Ok(payload)
}

/// Trims `value`, rejecting it if nothing remains.
pub fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    Ok(trimmed.to_string())
}

pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}
