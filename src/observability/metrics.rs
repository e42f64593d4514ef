//! Metrics collection and exposition.
//!
//! # Metrics
//! - `estimator_quotes_total` (counter): quotes served by form
//! - `estimator_invalid_options_total` (counter): rejected selection changes by form
//! - `estimator_submissions_total` (counter): lead submissions by form, outcome
//! - `estimator_http_request_duration_seconds` (histogram): API latency by route, status
//!
//! Without an installed recorder every call is a no-op, so the library can
//! record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::catalog::FormType;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_quote(form: FormType) {
    counter!("estimator_quotes_total", "form" => form.as_str()).increment(1);
}

pub fn record_invalid_option(form: FormType) {
    counter!("estimator_invalid_options_total", "form" => form.as_str()).increment(1);
}

pub fn record_submission(form: FormType, outcome: &'static str) {
    counter!(
        "estimator_submissions_total",
        "form" => form.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_request(route: &'static str, status: u16, start: Instant) {
    histogram!(
        "estimator_http_request_duration_seconds",
        "route" => route,
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
