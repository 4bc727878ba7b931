//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, from `main`
//! - Pick pretty or JSON output for stdout
//! - Optionally append JSON lines to a log file
//!
//! `RUST_LOG` overrides the configured level when set.

use std::fs::OpenOptions;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, ObservabilityConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Default filter directives for a given level.
fn default_directives(level: &str) -> String {
    format!("user_service={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig, level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    let file = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            Some(fmt::layer().json().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .with(file)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("warn"), "user_service=warn,tower_http=warn");
    }

    #[test]
    fn test_unwritable_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ObservabilityConfig {
            // A directory cannot be opened for appending.
            log_path: Some(dir.path().to_string_lossy().into_owned()),
            ..ObservabilityConfig::default()
        };
        let err = init_logging(&config, "info").unwrap_err();
        assert!(matches!(err, LoggingError::LogFile { .. }));
    }
}
