use greeting_service::config::GreetingConfig;
use greeting_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GreetingConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "greeting-service",
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    )?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    let result = app.run_until_stopped().await;

    tracing::info!("Greeting service stopped");
    shutdown_tracing();

    result.map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
