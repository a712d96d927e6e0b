//! Prometheus metrics for the relay
//!
//! Counts forwarded requests per endpoint, failed forwards, health check
//! outcomes and forward latency. Exposed on the relay's `/metrics` route.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Once;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Requests received by the relay, by endpoint
    pub static ref RELAY_REQUESTS: CounterVec = CounterVec::new(
        Opts::new(
            "askdocs_relay_requests_total",
            "Total number of requests received by the relay"
        ),
        &["endpoint"]
    ).expect("Failed to create RELAY_REQUESTS counter");

    /// Requests the relay could not satisfy, by endpoint and reason
    pub static ref RELAY_FAILURES: CounterVec = CounterVec::new(
        Opts::new(
            "askdocs_relay_failures_total",
            "Total number of relay requests that ended in an error response"
        ),
        &["endpoint", "reason"]
    ).expect("Failed to create RELAY_FAILURES counter");

    /// Health checks answered by the relay, by outcome
    pub static ref HEALTH_CHECKS: CounterVec = CounterVec::new(
        Opts::new(
            "askdocs_health_checks_total",
            "Total number of health checks answered by the relay"
        ),
        &["outcome"]
    ).expect("Failed to create HEALTH_CHECKS counter");

    /// Time spent waiting on the backend, in seconds
    pub static ref RELAY_LATENCY: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "askdocs_relay_latency_seconds",
            "Backend round-trip latency of forwarded requests in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["endpoint"]
    ).expect("Failed to create RELAY_LATENCY histogram");
}

static REGISTER: Once = Once::new();

/// Register all metrics with the global registry.
///
/// Safe to call more than once; only the first call registers.
pub fn register_metrics() {
    REGISTER.call_once(|| {
        REGISTRY
            .register(Box::new(RELAY_REQUESTS.clone()))
            .expect("Failed to register RELAY_REQUESTS");
        REGISTRY
            .register(Box::new(RELAY_FAILURES.clone()))
            .expect("Failed to register RELAY_FAILURES");
        REGISTRY
            .register(Box::new(HEALTH_CHECKS.clone()))
            .expect("Failed to register HEALTH_CHECKS");
        REGISTRY
            .register(Box::new(RELAY_LATENCY.clone()))
            .expect("Failed to register RELAY_LATENCY");
    });
}

/// Encode all registered metrics in the Prometheus text format.
///
/// Returns an empty string if encoding fails.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Metrics contained invalid UTF-8: {}", e);
        String::new()
    })
}
