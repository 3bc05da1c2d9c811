use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::models::{Greeting, GreetingParams};
use crate::services::record_greeting;
use crate::AppState;

/// `GET /greeting?name=<string>`
#[tracing::instrument(name = "greeting", skip_all)]
pub async fn greeting(
    State(state): State<AppState>,
    query: Result<Query<GreetingParams>, QueryRejection>,
) -> Result<Json<Greeting>, AppError> {
    let Query(params) =
        query.map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;
    params.validate()?;

    let greeting = state.greeter.greet(params.name.as_deref());
    record_greeting();
    tracing::debug!(id = greeting.id, "Greeting issued");

    Ok(Json(greeting))
}
