use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::{HealthStatus, ReadinessState};
use crate::AppState;

fn readiness_status(state: &AppState) -> HealthStatus {
    match state.availability.readiness() {
        ReadinessState::AcceptingTraffic => HealthStatus::Up,
        ReadinessState::RefusingTraffic => HealthStatus::OutOfService,
    }
}

/// Aggregate health: `DOWN` (503) when disk space is below threshold.
/// Readiness is reported but not aggregated, so a draining pod stays `UP`.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let disk_space = state.disk_space.check();

    let (code, status) = match disk_space.status {
        HealthStatus::Down => (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Down),
        _ => (StatusCode::OK, HealthStatus::Up),
    };

    (
        code,
        Json(json!({
            "status": status,
            "service": "greeting-service",
            "version": env!("CARGO_PKG_VERSION"),
            "components": {
                "ping": { "status": HealthStatus::Up },
                "diskSpace": disk_space,
                "readiness": { "status": readiness_status(&state) },
            }
        })),
    )
}

pub async fn liveness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": HealthStatus::Up,
        "state": state.availability.liveness(),
    }))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let code = if state.availability.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(json!({
            "status": readiness_status(&state),
            "state": state.availability.readiness(),
        })),
    )
}
