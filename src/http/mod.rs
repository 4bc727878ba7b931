//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (request ID, trace span)
//!     → middleware/ (CORS, bearer token)
//!     → users::transport / health handlers
//!     → response.rs (JSON encoding, error → status)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, JsonBody, JSON_CONTENT_TYPE};
pub use server::HttpServer;
