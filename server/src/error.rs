//! The one error type every validation failure and lookup miss flows through.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// An error carrying a message and the HTTP status it should be served with.
/// The response body is this struct serialized as-is:
/// `{"error": ..., "status_code": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// what went wrong
    pub error: String,
    /// HTTP status the handler raised it with
    pub status_code: u16,
}

impl ApiError {
    /// An error with an explicit status code.
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        ApiError {
            error: message.into(),
            status_code: status.as_u16(),
        }
    }

    /// 400 — validation failures and lookup misses both use this, matching
    /// the original API contract.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    /// 500 — unexpected persistence failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
