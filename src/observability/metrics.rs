//! Metrics collection and exposition.
//!
//! # Metrics
//! - `user_service_requests_total` (counter): requests by method, status, action
//! - `user_service_request_duration_seconds` (histogram): latency by action
//! - `user_service_users` (gauge): records currently stored

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, action: &'static str, start: Instant) {
    metrics::counter!(
        "user_service_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "action" => action
    )
    .increment(1);
    metrics::histogram!("user_service_request_duration_seconds", "action" => action)
        .record(start.elapsed().as_secs_f64());
}

/// Record the current number of stored users.
pub fn record_user_count(count: usize) {
    metrics::gauge!("user_service_users").set(count as f64);
}
