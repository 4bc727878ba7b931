//! User Service
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ http (request id, trace, timeout, CORS, auth)
//!                     │
//!                     ▼
//!                   users::transport (decode)
//!                     │
//!                     ▼
//!                   InstrumentingService → LoggingService → UserService
//!                                                              │
//!                                                              ▼
//!                                                      storage (RwLock map)
//!   Client Response
//!   ◀────────────── users::transport (encode / error mapping)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use user_service::config::{load_config, ServiceConfig};
use user_service::lifecycle::{wait_for_shutdown_signal, Shutdown};
use user_service::observability::{logging, metrics};
use user_service::{HttpServer, InMemoryUserRepository};

#[derive(Parser)]
#[command(name = "user-service", version, about = "User management HTTP service")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP listen address, overriding the configured one.
    #[arg(long = "http-addr")]
    http_addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(addr) = args.http_addr {
        config.listener.bind_address = addr;
    }

    logging::init_logging(&config.observability, config.effective_log_level())?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.app.environment,
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let repo = Arc::new(InMemoryUserRepository::new());
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, repo);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
