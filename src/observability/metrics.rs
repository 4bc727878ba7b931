//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_user_service_request_count` (counter): service calls by method
//! - `api_user_service_request_latency_seconds` (histogram): call latency by method
//!
//! Recording goes through the `metrics` facade, so whichever recorder is
//! installed receives the values. The binary installs the Prometheus
//! exporter, which serves `/metrics` on its own listener.

use std::net::SocketAddr;
use std::time::Instant;

use ::metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUEST_COUNT: &str = "api_user_service_request_count";
pub const REQUEST_LATENCY: &str = "api_user_service_request_latency_seconds";

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(REQUEST_COUNT, "Number of requests received.");
    describe_histogram!(REQUEST_LATENCY, Unit::Seconds, "Duration of requests in seconds.");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one service call that started at `start`.
pub fn record_service_call(method: &'static str, start: Instant) {
    counter!(REQUEST_COUNT, "method" => method).increment(1);
    histogram!(REQUEST_LATENCY, "method" => method).record(start.elapsed().as_secs_f64());
}
