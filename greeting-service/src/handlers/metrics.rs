use axum::{extract::State, http::header, response::IntoResponse};

use crate::services::render_metrics;
use crate::AppState;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        render_metrics(&state.metrics, &state.clock, state.greeter.issued()),
    )
}
