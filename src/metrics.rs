//! Prometheus metrics for request tracking.
//!
//! Metrics go through the `metrics` facade; without an installed recorder
//! (tests, `ENABLE_METRICS=false`) every call is a no-op.

use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use strum::{Display, IntoStaticStr};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{Result, ServiceError};

// === Metric Name Constants ===

/// Requests counter metric name.
pub const METRIC_REQUESTS: &str = "item_requests_total";
/// Request latency metric name.
pub const METRIC_REQUEST_LATENCY: &str = "item_request_latency_ms";
/// Stored items gauge metric name.
pub const METRIC_ITEMS_STORED: &str = "items_stored";

/// How often buffered histogram samples are drained.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Item operation, used as the `operation` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    /// POST /items/
    Create,
    /// GET /items/{item_id}
    Get,
    /// PUT /items/{item_id}
    Update,
    /// DELETE /items/{item_id}
    Delete,
}

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_REQUESTS,
        "Total number of item requests by operation and outcome"
    );
    describe_histogram!(
        METRIC_REQUEST_LATENCY,
        "Item request handling latency in milliseconds"
    );
    describe_gauge!(METRIC_ITEMS_STORED, "Number of items currently stored");

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Metrics(e.to_string()))
}

/// Periodically drain histogram samples into their summaries.
///
/// The recorder buffers every histogram sample until upkeep runs, so a
/// server that is never scraped needs this task to keep memory bounded.
pub fn spawn_upkeep(handle: PrometheusHandle, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Count a handled request.
pub fn record_request(operation: Operation, outcome: &'static str) {
    let operation: &'static str = operation.into();
    counter!(METRIC_REQUESTS, "operation" => operation, "outcome" => outcome).increment(1);
}

/// Publish the current store size.
pub fn set_items_stored(count: usize) {
    gauge!(METRIC_ITEMS_STORED).set(count as f64);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    operation: Operation,
}

impl LatencyTimer {
    /// Create a new latency timer for the given operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let operation: &'static str = self.operation.into();
        histogram!(METRIC_REQUEST_LATENCY, "operation" => operation).record(self.elapsed_ms());
    }
}
