//! Liveness endpoint.
//!
//! `GET /api/v1/health` answers `{}` with 200 whenever the process can serve
//! HTTP. It does not touch the user service or the repository.

use axum::{routing::get, Router};

use crate::http::response::JsonBody;
use crate::users::dto::EmptyResponse;

pub const HEALTH_PATH: &str = "/api/v1/health";

pub fn router() -> Router {
    Router::new().route(HEALTH_PATH, get(health_check))
}

async fn health_check() -> JsonBody<EmptyResponse> {
    JsonBody(EmptyResponse {})
}
