//! Request and response bodies of the users HTTP API.

use serde::{Deserialize, Serialize};

use crate::users::User;

/// Body of `POST /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "fav_color", default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadUserResponse {
    pub user: User,
}

/// Body of `PUT /api/v1/users/{id}`. A missing color clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserColorRequest {
    #[serde(default)]
    pub favorite_color: String,
}

/// Empty object returned by updates and the health check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}
