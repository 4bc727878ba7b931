//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Logging → Metrics → Server → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → trigger broadcast → server stops accepting → drain → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_shutdown_signal;
