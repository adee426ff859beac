//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define portal metrics (request counts, latency, rejections)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `portal_requests_total` (counter): total requests by endpoint, status
//! - `portal_request_duration_seconds` (histogram): latency distribution
//! - `portal_rejected_total` (counter): requests rejected by class
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels carry only server-chosen values (endpoint, status), never
//!   request data, so label cardinality stays bounded

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();

    metrics::counter!(
        "portal_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string(),
    )
    .increment(1);

    metrics::histogram!(
        "portal_request_duration_seconds",
        "endpoint" => endpoint,
    )
    .record(elapsed);
}

/// Record a rejected request by rejection class.
pub fn record_rejected(class: &'static str) {
    metrics::counter!("portal_rejected_total", "class" => class).increment(1);
}
