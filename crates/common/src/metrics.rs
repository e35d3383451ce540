//! Prometheus metrics for the customer API (default registry).
//!
//! Counters are labelled by operation (`list`, `get`, `add`, `update`, `delete`)
//! and outcome (`ok`, `bad_request`, `not_found`, `conflict`, `error`).

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder,
};

pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "customers_api_operations_total",
        "Customer operations handled by the service layer",
        &["operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static OPERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "customers_api_operation_duration_seconds",
        "Customer operation duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register operation_duration")
});

/// Count one finished operation and record its latency.
pub fn observe(operation: &str, outcome: &str, elapsed_secs: f64) {
    OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
    OPERATION_DURATION.with_label_values(&[operation]).observe(elapsed_secs);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
