// src/server/handlers/mod.rs
//! HTTP request handlers for the registry server

pub mod categories;
pub mod search;

use crate::error::Error;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::time::Duration;

/// Error wrapper that maps library errors onto HTTP responses
///
/// Caller and store failures answer 404 with the message as body.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() || matches!(self.0, Error::StoreUnavailable(_)) {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if self.0.is_client_error() {
            tracing::debug!("Rejected request: {}", self.0);
        } else {
            tracing::error!("Request failed: {}", self.0);
        }

        (status, self.0.to_string()).into_response()
    }
}

/// Cache-Control value for a max-age
pub fn cache_control(max_age: Duration) -> String {
    format!("max-age={}, public", max_age.as_secs())
}

/// JSON body with public caching
pub fn json_response(body: Vec<u8>, max_age: Duration) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CACHE_CONTROL, cache_control(max_age)),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control(Duration::from_secs(3600)), "max-age=3600, public");
    }

    #[test]
    fn test_error_status() {
        let invalid = ApiError(Error::InvalidInput("bad".into())).into_response();
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);

        let version = ApiError(Error::MalformedVersion {
            input: "7.x".into(),
            reason: "unexpected character".into(),
        })
        .into_response();
        assert_eq!(version.status(), StatusCode::NOT_FOUND);

        let store = ApiError(Error::StoreUnavailable("gone".into())).into_response();
        assert_eq!(store.status(), StatusCode::NOT_FOUND);

        let other = ApiError(Error::DataQuality("dup".into())).into_response();
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
