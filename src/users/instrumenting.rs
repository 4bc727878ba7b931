//! Metrics decorator for the user service.

use std::time::Instant;

use crate::error::UserResult;
use crate::observability::metrics;
use crate::users::{Service, User};

/// Wraps a [`Service`] and records a request count and latency per method.
pub struct InstrumentingService<S> {
    inner: S,
}

impl<S: Service> InstrumentingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Service> Service for InstrumentingService<S> {
    fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        color: Option<&str>,
    ) -> UserResult<i64> {
        let begin = Instant::now();
        let result = self.inner.create_user(id, first_name, last_name, color);
        metrics::record_service_call("create_user", begin);
        result
    }

    fn read_user(&self, id: i64) -> UserResult<User> {
        let begin = Instant::now();
        let result = self.inner.read_user(id);
        metrics::record_service_call("read_user", begin);
        result
    }

    fn update_user_color(&self, id: i64, color: &str) -> UserResult<()> {
        let begin = Instant::now();
        let result = self.inner.update_user_color(id, color);
        metrics::record_service_call("update_user_color", begin);
        result
    }

    fn users(&self) -> UserResult<Vec<User>> {
        let begin = Instant::now();
        let result = self.inner.users();
        metrics::record_service_call("users", begin);
        result
    }
}
