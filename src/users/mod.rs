//! User domain.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → transport.rs (decode body / path id)
//!     → InstrumentingService (request count + latency)
//!     → LoggingService (structured event per call)
//!     → UserService (id validation, field scoping)
//!     → Repository (storage/)
//!     → transport.rs (JSON encode, error → status)
//! ```
//!
//! # Design Decisions
//! - Decorators implement `Service` themselves and own the service they wrap
//! - Errors flow through every layer unchanged so transport can match on them

pub mod dto;
pub mod instrumenting;
pub mod logging;
pub mod service;
pub mod transport;
pub mod user;

use std::sync::Arc;

pub use instrumenting::InstrumentingService;
pub use logging::LoggingService;
pub use service::{Service, UserService};
pub use user::{Repository, User};

/// Compose the production decorator stack around a repository.
pub fn new_service<R: Repository + 'static>(repo: R) -> Arc<dyn Service> {
    Arc::new(InstrumentingService::new(LoggingService::new(
        UserService::new(repo),
    )))
}
