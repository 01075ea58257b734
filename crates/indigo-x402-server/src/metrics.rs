use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use std::sync::LazyLock;

/// Requests per route, labelled with the route path and the status returned.
/// `/metrics` itself is not counted.
pub static REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "indigo_requests_total",
        "Total HTTP requests",
        &["endpoint", "status"]
    )
    .unwrap()
});

pub static PAYMENT_ATTEMPTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "indigo_payment_attempts_total",
        "Total payment attempts",
        &["result"]
    )
    .unwrap()
});

/// Count a request to `endpoint` that finished with `status`.
pub fn record_request(endpoint: &str, status: u16) {
    REQUESTS
        .with_label_values(&[endpoint, status.to_string().as_str()])
        .inc();
}

pub fn metrics_output() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
