//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use crate::registry::ContentKey;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// This must be called once at startup before any metrics are recorded.
/// Panics if called more than once.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// A default was written to the store on first read.
pub fn record_seed(key: ContentKey) {
    counter!("content_seeded_total", "key" => key.collection_name()).increment(1);
}

/// A request was served without a store.
pub fn record_degraded(key: ContentKey, op: &'static str) {
    counter!("content_degraded_total", "key" => key.collection_name(), "op" => op).increment(1);
}

/// `mode` is `insert` or `merge`.
pub fn record_upsert(key: ContentKey, mode: &'static str) {
    counter!("content_upserts_total", "key" => key.collection_name(), "mode" => mode).increment(1);
}
