use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// A user as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "fav_color", default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct CreatedBody {
    id: i64,
}

#[derive(Deserialize)]
struct UserBody {
    user: User,
}

#[derive(Deserialize)]
struct UsersBody {
    #[serde(default)]
    users: Vec<User>,
}

pub struct UserClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every users request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn users_url(&self) -> String {
        format!("{}/api/v1/users", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// `GET /api/v1/health`.
    pub async fn health(&self) -> Result<(), ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/v1/health", self.base_url))
            .send()
            .await?;
        Self::decode::<serde_json::Value>(resp).await.map(|_| ())
    }

    /// Create or overwrite a user, returning its id.
    pub async fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        favorite_color: Option<&str>,
    ) -> Result<i64, ClientError> {
        let mut body = json!({
            "id": id,
            "first_name": first_name,
            "last_name": last_name,
        });
        if let Some(color) = favorite_color {
            body["fav_color"] = json!(color);
        }

        let resp = self
            .authorize(self.client.post(self.users_url()).json(&body))
            .send()
            .await?;
        Ok(Self::decode::<CreatedBody>(resp).await?.id)
    }

    pub async fn read_user(&self, id: i64) -> Result<User, ClientError> {
        let resp = self
            .authorize(self.client.get(format!("{}/{}", self.users_url(), id)))
            .send()
            .await?;
        Ok(Self::decode::<UserBody>(resp).await?.user)
    }

    pub async fn update_user_color(&self, id: i64, color: &str) -> Result<(), ClientError> {
        let resp = self
            .authorize(
                self.client
                    .put(format!("{}/{}", self.users_url(), id))
                    .json(&json!({ "favorite_color": color })),
            )
            .send()
            .await?;
        Self::decode::<serde_json::Value>(resp).await.map(|_| ())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self.authorize(self.client.get(self.users_url())).send().await?;
        Ok(Self::decode::<UsersBody>(resp).await?.users)
    }
}
