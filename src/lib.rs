//! User Service Library
//!
//! A small JSON-over-HTTP service managing users, layered as
//! transport → decorated service → repository.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod storage;
pub mod users;

pub use config::schema::ServiceConfig;
pub use error::UserError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use storage::InMemoryUserRepository;
