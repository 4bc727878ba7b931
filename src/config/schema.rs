//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the user service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Application environment settings.
    pub app: AppConfig,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Authentication and request hardening.
    pub security: SecurityConfig,
}

impl ServiceConfig {
    pub fn is_development(&self) -> bool {
        self.app.environment == Environment::Development
    }

    pub fn is_staging(&self) -> bool {
        self.app.environment == Environment::Staging
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == Environment::Production
    }

    pub fn is_debug(&self) -> bool {
        self.app.debug
    }

    /// Log level to run with.
    ///
    /// An explicit `observability.log_level` wins. Otherwise debug mode logs
    /// everything, production only errors, anything else at info.
    pub fn effective_log_level(&self) -> &str {
        if let Some(level) = &self.observability.log_level {
            return level;
        }
        if self.is_debug() {
            "debug"
        } else if self.is_production() {
            "error"
        } else {
            "info"
        }
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// Application-level settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Which environment the service runs in.
    pub environment: Environment,

    /// Debug mode (verbose logging).
    pub debug: bool,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 300 }
    }
}

/// Stdout log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). Derived from the
    /// environment when unset.
    pub log_level: Option<String>,

    /// Stdout format.
    pub log_format: LogFormat,

    /// Optional file receiving JSON log lines.
    pub log_path: Option<String>,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_format: LogFormat::Pretty,
            log_path: None,
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Bearer token required on the users API. No check when unset.
    pub token: Option<String>,

    /// Add CORS headers and answer preflight requests.
    pub cors_enabled: bool,

    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            token: None,
            cors_enabled: true,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}
