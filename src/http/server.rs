//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compose the user service decorator stack over the repository
//! - Create the Axum Router with the users and health handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, auth, CORS)
//! - Keep every error response JSON, including those from tower-http layers
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

use crate::config::ServiceConfig;
use crate::health;
use crate::http::middleware::{
    access_control_middleware, json_error_middleware, token_auth_middleware, TokenAuth,
};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, trace_layer};
use crate::http::response::{method_not_allowed, not_found};
use crate::users::{self, Repository, Service};

/// HTTP server for the user service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given repository.
    pub fn new(config: ServiceConfig, repo: Arc<dyn Repository>) -> Self {
        let service = users::new_service(repo);
        let router = Self::build_router(&config, service);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, service: Arc<dyn Service>) -> Router {
        let auth = TokenAuth::new(config.security.token.as_deref());
        let users = users::transport::router(service)
            .layer(middleware::from_fn_with_state(auth, token_auth_middleware));

        let router = Router::new()
            .merge(users)
            .merge(health::router())
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(json_error_middleware))
            .layer(propagate_request_id_layer())
            .layer(trace_layer())
            .layer(set_request_id_layer());

        if config.security.cors_enabled {
            router.layer(middleware::from_fn(access_control_middleware))
        } else {
            router
        }
    }

    /// The fully layered router, for serving through other means.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown receiver fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.app.environment,
            auth = self.config.security.token.is_some(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
