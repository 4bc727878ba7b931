//! Repository implementations.
//!
//! # Data Flow
//! ```text
//! UserService
//!     → Repository trait (users/user.rs)
//!     → memory.rs (RwLock<HashMap<i64, User>>)
//! ```
//!
//! Only an in-memory backend exists. Anything implementing
//! [`Repository`](crate::users::Repository) can be handed to the server.

pub mod memory;

pub use memory::InMemoryUserRepository;
