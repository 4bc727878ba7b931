//! Re-encodes error responses produced outside the handlers as JSON.
//!
//! tower-http's body limit and timeout layers answer with plain text (413) or
//! an empty body (408). This middleware sits outside them and rewrites any
//! non-JSON error response into the usual `{"error": "..."}` shape, keeping
//! the status and the remaining headers.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::http::response::{error_response, JSON_CONTENT_TYPE};

/// Upper bound on an error body we are willing to buffer for re-encoding.
const MAX_ERROR_BODY: usize = 64 * 1024;

pub async fn json_error_middleware(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match axum::body::to_bytes(body, MAX_ERROR_BODY).await {
        Ok(bytes) if !bytes.trim_ascii().is_empty() => {
            String::from_utf8_lossy(bytes.trim_ascii()).into_owned()
        }
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_ascii_lowercase(),
    };

    let mut rewritten = error_response(status, message);
    let mut headers = parts.headers;
    headers.remove(header::CONTENT_LENGTH);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    *rewritten.headers_mut() = headers;
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::ApiError;
    use axum::http::StatusCode;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/timeout", get(|| async { StatusCode::REQUEST_TIMEOUT }))
            .route(
                "/too-large",
                get(|| async { (StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded") }),
            )
            .route("/json", get(|| async { ApiError::RouteNotFound }))
            .route("/ok", get(|| async { "plain success" }))
            .layer(middleware::from_fn(json_error_middleware))
    }

    async fn get_path(path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason_phrase() {
        let (status, content_type, body) = get_path("/timeout").await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, br#"{"error":"request timeout"}"#);
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_wrapped() {
        let (status, content_type, body) = get_path("/too-large").await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, br#"{"error":"length limit exceeded"}"#);
    }

    #[tokio::test]
    async fn test_json_errors_and_successes_untouched() {
        let (status, _, body) = get_path("/json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, br#"{"error":"route not found"}"#);

        let (status, content_type, body) = get_path("/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, b"plain success");
    }
}
