//! HTTP transport for the user service.
//!
//! ## Routes
//!
//! - `POST /api/v1/users`: create (or overwrite) a user
//! - `GET /api/v1/users`: list users
//! - `GET /api/v1/users/{id}`: read one user
//! - `PUT /api/v1/users/{id}`: update the favorite color
//!
//! Bodies are decoded with `serde_json` directly rather than through the
//! `Json` extractor so that a malformed body goes through [`ApiError`] and
//! gets the same JSON error shape as every other failure. The same goes for
//! a body that cannot be read at all.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;

use crate::http::response::{ApiError, JsonBody};
use crate::users::dto::{
    CreateUserRequest, CreateUserResponse, EmptyResponse, ListUsersResponse, ReadUserResponse,
    UpdateUserColorRequest,
};
use crate::users::Service;

pub type SharedService = Arc<dyn Service>;

/// Build the users router over the given (usually decorated) service.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/api/v1/users", get(list_users).post(create_user))
        .route("/api/v1/users/{id}", get(read_user).put(update_user_color))
        .with_state(service)
}

fn decode<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(&body?)?)
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|source| ApiError::InvalidId {
        value: raw.to_string(),
        source,
    })
}

async fn create_user(
    State(service): State<SharedService>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonBody<CreateUserResponse>, ApiError> {
    let req: CreateUserRequest = decode(body)?;
    let id = service.create_user(
        req.id,
        &req.first_name,
        &req.last_name,
        req.favorite_color.as_deref(),
    )?;
    Ok(JsonBody(CreateUserResponse { id }))
}

async fn read_user(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<JsonBody<ReadUserResponse>, ApiError> {
    let user = service.read_user(parse_id(&id)?)?;
    Ok(JsonBody(ReadUserResponse { user }))
}

async fn update_user_color(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonBody<EmptyResponse>, ApiError> {
    let id = parse_id(&id)?;
    let req: UpdateUserColorRequest = decode(body)?;
    service.update_user_color(id, &req.favorite_color)?;
    Ok(JsonBody(EmptyResponse {}))
}

async fn list_users(
    State(service): State<SharedService>,
) -> Result<JsonBody<ListUsersResponse>, ApiError> {
    let users = service.users()?;
    Ok(JsonBody(ListUsersResponse { users }))
}
