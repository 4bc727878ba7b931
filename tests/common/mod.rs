//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use user_service::lifecycle::Shutdown;
use user_service::{HttpServer, InMemoryUserRepository, ServiceConfig};

/// A server running on an ephemeral port. Shuts down on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub repo: Arc<InMemoryUserRepository>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the given config on 127.0.0.1 and a random port.
pub async fn start_server(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let repo = Arc::new(InMemoryUserRepository::new());
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, repo.clone());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        repo,
        shutdown,
    }
}
