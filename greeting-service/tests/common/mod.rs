#![allow(dead_code)]

use greeting_service::config::{GreetingConfig, GreetingSettings};
use greeting_service::services::Availability;
use greeting_service::startup::Application;
use service_core::config::Config as CoreConfig;
use tokio::sync::oneshot;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub availability: Availability,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<tokio::task::JoinHandle<std::io::Result<()>>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(GreetingSettings::default()).await
    }

    pub async fn spawn_with(greeting: GreetingSettings) -> Self {
        Self::spawn_with_config(GreetingConfig {
            greeting,
            ..Default::default()
        })
        .await
    }

    /// Spawn with `config`, forcing a random loopback port.
    pub async fn spawn_with_config(mut config: GreetingConfig) -> Self {
        config.server = CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);
        let availability = app.state().availability.clone();

        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(app.run_until(async move {
            rx.await.ok();
        }));

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            availability,
            shutdown: Some(tx),
            server: Some(server),
        }
    }

    pub async fn get_greeting(&self, query: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/greeting{}", self.address, query))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
        if let Some(server) = self.server.take() {
            server
                .await
                .expect("Server task panicked")
                .expect("Server returned an error");
        }
    }
}
