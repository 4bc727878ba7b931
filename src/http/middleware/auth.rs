//! Bearer token check for the users API.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;

/// Token the client must present. `None` disables the check.
#[derive(Clone, Default)]
pub struct TokenAuth {
    token: Option<Arc<str>>,
}

impl TokenAuth {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: token.map(Arc::from),
        }
    }

    fn authorizes(&self, header: Option<&str>) -> bool {
        match &self.token {
            None => true,
            Some(token) => header
                .and_then(|h| h.strip_prefix("Bearer "))
                .is_some_and(|presented| presented == &**token),
        }
    }
}

pub async fn token_auth_middleware(
    State(auth): State<TokenAuth>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if auth.authorizes(header) {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "Rejected request without valid token");
    ApiError::Unauthorized.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_allows_everything() {
        let auth = TokenAuth::new(None);
        assert!(auth.authorizes(None));
        assert!(auth.authorizes(Some("Bearer whatever")));
    }

    #[test]
    fn test_requires_matching_bearer() {
        let auth = TokenAuth::new(Some("secret"));
        assert!(auth.authorizes(Some("Bearer secret")));
        assert!(!auth.authorizes(Some("Bearer wrong")));
        assert!(!auth.authorizes(Some("secret")));
        assert!(!auth.authorizes(None));
    }
}
