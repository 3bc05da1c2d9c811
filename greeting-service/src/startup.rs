//! Router assembly and server lifecycle.

use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::Future;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::GreetingConfig;
use crate::handlers::{
    greeting, health_check, info, liveness_check, not_found, readiness_check,
};
use crate::services::{init_metrics, record_ready_time, Greeter};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/greeting", get(greeting))
        .route("/health", get(health_check))
        .route("/health/liveness", get(liveness_check))
        .route("/health/readiness", get(readiness_check))
        .route("/ready", get(readiness_check))
        .route("/info", get(info))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .fallback(not_found)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration. Port 0 binds an
    /// ephemeral port.
    pub async fn build(config: GreetingConfig) -> Result<Self, AppError> {
        let build_started = Instant::now();
        config.validate()?;

        let template = config.greeting.parsed_template()?;
        let greeter = Greeter::new(template, config.greeting.default_name.clone());

        let metrics = init_metrics().map_err(|e| {
            tracing::error!("Failed to install Prometheus recorder: {}", e);
            AppError::InternalError(anyhow::Error::new(e))
        })?;

        let state = AppState::new(greeter, metrics)
            .with_disk_space(config.health.disk_space.indicator());

        let address = config.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();
        record_ready_time(build_started.elapsed());

        tracing::info!("Greeting service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Shared state, e.g. to observe readiness from outside the server.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until a Ctrl+C / SIGTERM arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves. Readiness flips to refusing traffic
    /// before in-flight requests are drained.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let availability = self.state.availability.clone();
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                availability.refuse_traffic();
            })
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
