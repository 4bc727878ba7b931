//! CORS access-control middleware.
//! Answers preflight requests and stamps the allow headers on every response.

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, OPTIONS";
pub const ALLOW_HEADERS: &str = "Origin, Content-Type, Authorization";

pub async fn access_control_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;
        response
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}
