//! Cross-origin resource sharing for the browser front end.
//!
//! `tower_http`'s `CorsLayer` attaches the allow-origin header to every response and
//! answers preflight requests itself. Preflight answers are rewritten to
//! `204 No Content` by `preflight_no_content`, which must wrap the CORS layer.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::error::config::ConfigError;

/// Builds the CORS layer for the configured origin; `*` allows any origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: origin.to_string(),
            reason: e.to_string(),
        })?;

        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

pub async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;

    let mut response = next.run(request).await;

    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    response
}
