//! Liveness and readiness state reported to the orchestrator.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessState {
    Correct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessState {
    AcceptingTraffic,
    RefusingTraffic,
}

/// Shared handle; clones observe the same state.
#[derive(Debug, Clone)]
pub struct Availability {
    accepting: Arc<AtomicBool>,
}

impl Availability {
    pub fn new() -> Self {
        Self {
            accepting: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn liveness(&self) -> LivenessState {
        LivenessState::Correct
    }

    pub fn readiness(&self) -> ReadinessState {
        if self.accepting.load(Ordering::Acquire) {
            ReadinessState::AcceptingTraffic
        } else {
            ReadinessState::RefusingTraffic
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == ReadinessState::AcceptingTraffic
    }

    pub fn refuse_traffic(&self) {
        if self.accepting.swap(false, Ordering::AcqRel) {
            tracing::info!("Readiness changed to REFUSING_TRAFFIC");
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready() {
        let availability = Availability::new();
        assert_eq!(availability.liveness(), LivenessState::Correct);
        assert!(availability.is_ready());
    }

    #[test]
    fn refusal_is_shared_between_clones() {
        let availability = Availability::new();
        let observer = availability.clone();

        availability.refuse_traffic();

        assert_eq!(observer.readiness(), ReadinessState::RefusingTraffic);
        assert_eq!(observer.liveness(), LivenessState::Correct);
    }

    #[test]
    fn states_serialize_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(ReadinessState::RefusingTraffic).unwrap(),
            "REFUSING_TRAFFIC"
        );
        assert_eq!(serde_json::to_value(LivenessState::Correct).unwrap(), "CORRECT");
    }
}
