//! Response encoding and error mapping.
//!
//! # Responsibilities
//! - Serialize every response body as JSON
//! - Stamp `Content-Type: application/json; charset=utf-8`
//! - Map errors to status codes and an `{"error": "..."}` body
//!
//! # Design Decisions
//! - Only the two business errors get client status codes; anything else
//!   (decode failures, storage faults) is a 500
//! - Body read failures keep the status axum assigns them (413 for an
//!   over-limit body)
//! - Serialization failure of a success body is itself reported as a 500

use std::num::ParseIntError;

use axum::extract::rejection::BytesRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::error::UserError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserError),

    /// Request body was not valid JSON for the expected shape.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be read, for example because it exceeded the
    /// configured size limit.
    #[error("{0}")]
    Body(#[from] BytesRejection),

    /// Path id was not an integer.
    #[error("invalid user id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unauthorized")]
    Unauthorized,

    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::User(UserError::InvalidArgument) | ApiError::InvalidId { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::User(UserError::NotFound) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::User(UserError::Storage(_)) | ApiError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
pub(crate) struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }
        error_response(status, self.to_string())
    }
}

/// A JSON success body.
pub struct JsonBody<T>(pub T);

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        json_response(StatusCode::OK, &self.0)
    }
}

/// Serialize `body` with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode response");
            let body = format!("{{\"error\":{}}}", serde_json::Value::String(e.to_string()));
            let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            response
        }
    }
}

/// An `{"error": message}` body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(status, &ErrorBody { error: message.into() })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(UserError::InvalidArgument).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(UserError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(UserError::Storage("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let decode = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        assert_eq!(ApiError::from(decode).status(), StatusCode::INTERNAL_SERVER_ERROR);

        let parse = "abc".parse::<i64>().unwrap_err();
        let invalid = ApiError::InvalidId {
            value: "abc".into(),
            source: parse,
        };
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_error_body_and_content_type() {
        let response = ApiError::from(UserError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_json(response).await, serde_json::json!({"error": "User not found"}));
    }

    #[tokio::test]
    async fn test_success_body() {
        let response = JsonBody(serde_json::json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_json(response).await, serde_json::json!({"id": 1}));
    }
}
