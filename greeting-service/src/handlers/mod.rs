//! HTTP handlers for greeting-service: the greeting itself plus the
//! operational endpoints orchestrators and scrapers hit.

pub mod greeting;
pub mod health;
pub mod info;
pub mod metrics;

use axum::http::Uri;
use service_core::error::AppError;

pub use greeting::greeting;
pub use health::{health_check, liveness_check, readiness_check};
pub use info::info;

/// JSON 404 for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
