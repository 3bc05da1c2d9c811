pub mod availability;
pub mod counter;
pub mod disk_space;
pub mod greeter;
pub mod metrics;

pub use self::metrics::{
    init_metrics, record_greeting, record_ready_time, render_metrics, ProcessClock,
};
pub use availability::{Availability, LivenessState, ReadinessState};
pub use counter::Counter;
pub use disk_space::{DiskSpaceHealth, DiskSpaceIndicator, HealthStatus};
pub use greeter::Greeter;
