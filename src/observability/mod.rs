//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer / service decorators produce:
//!     → logging.rs (structured tracing events, stdout + optional file)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON-lines file)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Subscriber and recorder are installed once by `main`; library code only
//!   emits through the `tracing` and `metrics` facades
//! - Request ID is attached to every request span by the HTTP layer

pub mod logging;
pub mod metrics;
