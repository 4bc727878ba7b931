pub mod access_control;
pub mod auth;
pub mod error_body;

pub use access_control::access_control_middleware;
pub use auth::{token_auth_middleware, TokenAuth};
pub use error_body::json_error_middleware;
