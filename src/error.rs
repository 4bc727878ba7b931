//! Business error kinds shared by the repository, service and transport layers.

use thiserror::Error;

/// Errors surfaced by user operations.
///
/// The two business kinds carry fixed messages because clients match on the
/// JSON `error` string. Every layer passes the value through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// The id was not a positive integer.
    #[error("Invalid function argument(s)")]
    InvalidArgument,

    /// No record exists at the requested id.
    #[error("User not found")]
    NotFound,

    /// The storage backend failed for a reason unrelated to the request.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Result alias for user operations.
pub type UserResult<T> = Result<T, UserError>;
