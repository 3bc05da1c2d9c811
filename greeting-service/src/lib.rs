pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use metrics_exporter_prometheus::PrometheusHandle;
use services::{Availability, DiskSpaceIndicator, Greeter, ProcessClock};
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub greeter: Arc<Greeter>,
    pub availability: Availability,
    pub metrics: PrometheusHandle,
    pub clock: ProcessClock,
    pub disk_space: DiskSpaceIndicator,
}

impl AppState {
    pub fn new(greeter: Greeter, metrics: PrometheusHandle) -> Self {
        Self {
            greeter: Arc::new(greeter),
            availability: Availability::new(),
            metrics,
            clock: ProcessClock::start(),
            disk_space: DiskSpaceIndicator::default(),
        }
    }

    pub fn with_disk_space(mut self, disk_space: DiskSpaceIndicator) -> Self {
        self.disk_space = disk_space;
        self
    }
}
