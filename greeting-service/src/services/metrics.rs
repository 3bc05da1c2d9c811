//! Prometheus recorder setup and scrape rendering for greeting-service.

use metrics::gauge;
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use metrics_process::Collector;
use once_cell::sync::{Lazy, OnceCell};
use std::time::{Duration, Instant};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// CPU, memory, thread and file-descriptor gauges (`process_*`).
static PROCESS_COLLECTOR: Lazy<Collector> = Lazy::new(Collector::default);

const HTTP_DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

/// Install the global Prometheus recorder. Later calls return the same handle,
/// so several applications in one process (tests) share a recorder.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    METRICS_HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full("http_request_duration_seconds".to_string()),
                    HTTP_DURATION_BUCKETS,
                )?
                .install_recorder()?;
            PROCESS_COLLECTOR.describe();
            Ok(handle)
        })
        .cloned()
}

/// Process start reference for uptime gauges.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Count one issued greeting.
pub fn record_greeting() {
    metrics::counter!("greetings_total").increment(1);
}

/// Time from the start of application build until the listener was bound.
pub fn record_ready_time(elapsed: Duration) {
    gauge!("application_ready_time_seconds").set(elapsed.as_secs_f64());
}

/// Refresh point-in-time gauges and render the exposition text.
pub fn render_metrics(handle: &PrometheusHandle, clock: &ProcessClock, issued: u64) -> String {
    PROCESS_COLLECTOR.collect();
    gauge!("process_uptime_seconds").set(clock.uptime_seconds());
    gauge!("greeting_counter_value").set(issued as f64);

    handle.render()
}
