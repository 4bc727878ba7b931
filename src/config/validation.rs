//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("observability.log_level: unknown level {0:?}")]
    UnknownLogLevel(String),

    #[error("security.token: must not be empty, omit it to disable the check")]
    EmptyToken,
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::NotPositive {
            field: "timeouts.request_secs",
        });
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::NotPositive {
            field: "security.max_body_size",
        });
    }

    if let Some(level) = &config.observability.log_level {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            errors.push(ValidationError::UnknownLogLevel(level.clone()));
        }
    }

    if matches!(config.security.token.as_deref(), Some(t) if t.trim().is_empty()) {
        errors.push(ValidationError::EmptyToken);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
