use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GreetingInfo {
    pub template: String,
    pub default_name: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: AppInfo,
    pub greeting: GreetingInfo,
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: AppInfo {
            name: env!("CARGO_PKG_NAME"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
        },
        greeting: GreetingInfo {
            template: state.greeter.template().to_string(),
            default_name: state.greeter.default_name().to_string(),
        },
    })
}
