//! Logging decorator for the user service.

use std::time::Instant;

use crate::error::UserResult;
use crate::users::{Service, User};

/// Wraps a [`Service`] and emits one structured event per call with the
/// method name, its arguments, the elapsed time and the outcome.
pub struct LoggingService<S> {
    inner: S,
}

impl<S: Service> LoggingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

macro_rules! log_outcome {
    ($result:expr, $($field:tt)*) => {
        match $result {
            Ok(_) => tracing::info!(target: "user_service::users", $($field)*),
            Err(e) => tracing::warn!(target: "user_service::users", error = %e, $($field)*),
        }
    };
}

impl<S: Service> Service for LoggingService<S> {
    fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        color: Option<&str>,
    ) -> UserResult<i64> {
        let begin = Instant::now();
        let result = self.inner.create_user(id, first_name, last_name, color);
        log_outcome!(
            &result,
            method = "create_user",
            id,
            first_name,
            last_name,
            color = color.unwrap_or_default(),
            elapsed = ?begin.elapsed(),
            "service call"
        );
        result
    }

    fn read_user(&self, id: i64) -> UserResult<User> {
        let begin = Instant::now();
        let result = self.inner.read_user(id);
        log_outcome!(&result, method = "read_user", id, elapsed = ?begin.elapsed(), "service call");
        result
    }

    fn update_user_color(&self, id: i64, color: &str) -> UserResult<()> {
        let begin = Instant::now();
        let result = self.inner.update_user_color(id, color);
        log_outcome!(
            &result,
            method = "update_user_color",
            id,
            color,
            elapsed = ?begin.elapsed(),
            "service call"
        );
        result
    }

    fn users(&self) -> UserResult<Vec<User>> {
        let begin = Instant::now();
        let result = self.inner.users();
        let count = result.as_ref().map(Vec::len).unwrap_or_default();
        log_outcome!(&result, method = "users", count, elapsed = ?begin.elapsed(), "service call");
        result
    }
}
