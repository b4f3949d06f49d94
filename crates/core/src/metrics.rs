//! Metrics definitions for the consumer.
//!
//! This module defines all metrics used throughout the consumer.
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "packages_resolved_total",
        "Total number of packages successfully resolved"
    );
    describe_counter!(
        "blocks_received_total",
        "Total number of stream responses delivered to the sink"
    );
    describe_histogram!(
        "block_process_duration_seconds",
        "Time the sink took to process one response in seconds"
    );
    describe_counter!(
        "sink_errors_total",
        "Total number of sink errors by lifecycle phase"
    );
    describe_counter!(
        "stream_interruptions_total",
        "Total number of sessions that ended abnormally"
    );
}

/// Record a successfully resolved package.
///
/// # Arguments
/// * `source` - Where the package came from ("gateway" or "file")
pub fn record_package_resolved(source: &str) {
    counter!("packages_resolved_total", "source" => source.to_string()).increment(1);
}

/// Record a response delivered to the sink.
pub fn record_block_received() {
    counter!("blocks_received_total").increment(1);
}

/// Record sink processing duration for one response.
pub fn record_block_process_duration(duration_secs: f64) {
    histogram!("block_process_duration_seconds").record(duration_secs);
}

/// Record a sink error.
///
/// # Arguments
/// * `phase` - The lifecycle phase ("init", "process_block" or "done")
pub fn record_sink_error(phase: &str) {
    counter!("sink_errors_total", "phase" => phase.to_string()).increment(1);
}

/// Record an abnormal session end.
pub fn record_stream_interrupted() {
    counter!("stream_interruptions_total").increment(1);
}

/// Timer that records block processing duration when dropped.
pub struct BlockTimer {
    start: Instant,
}

impl BlockTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for BlockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BlockTimer {
    fn drop(&mut self) {
        record_block_process_duration(self.start.elapsed().as_secs_f64());
    }
}
