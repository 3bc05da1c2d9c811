use crate::models::GreetingTemplate;
use crate::services::disk_space::{DiskSpaceIndicator, DEFAULT_THRESHOLD_BYTES};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::path::PathBuf;
use validator::Validate;

pub const SERVICE_DIR: &str = "greeting-service";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingConfig {
    #[serde(default)]
    pub server: core_config::Config,
    #[serde(default)]
    pub greeting: GreetingSettings,
    #[serde(default)]
    pub observability: ObservabilitySettings,
    #[serde(default)]
    pub health: HealthSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GreetingSettings {
    /// Must contain exactly one `%s`.
    #[serde(default = "default_template")]
    pub template: String,
    /// Used when the request carries no (or an empty) `name`.
    #[serde(default = "default_name")]
    #[validate(length(min = 1, message = "Default name cannot be empty"))]
    pub default_name: String,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            template: default_template(),
            default_name: default_name(),
        }
    }
}

impl GreetingSettings {
    pub fn parsed_template(&self) -> Result<GreetingTemplate, AppError> {
        GreetingTemplate::parse(&self.template)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilitySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector; trace export is off when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthSettings {
    #[serde(default)]
    pub disk_space: DiskSpaceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiskSpaceSettings {
    #[serde(default = "default_disk_path")]
    pub path: PathBuf,
    /// Minimum free bytes before `/health` reports `DOWN`.
    #[serde(default = "default_disk_threshold")]
    pub threshold: u64,
}

impl Default for DiskSpaceSettings {
    fn default() -> Self {
        Self {
            path: default_disk_path(),
            threshold: default_disk_threshold(),
        }
    }
}

impl DiskSpaceSettings {
    pub fn indicator(&self) -> DiskSpaceIndicator {
        DiskSpaceIndicator::new(self.path.clone(), self.threshold)
    }
}

fn default_disk_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_disk_threshold() -> u64 {
    DEFAULT_THRESHOLD_BYTES
}

fn default_template() -> String {
    "Hello, %s!".to_string()
}

fn default_name() -> String {
    "World".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GreetingConfig {
    pub fn load() -> Result<Self, AppError> {
        let config: GreetingConfig = core_config::load(SERVICE_DIR)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later at request time.
    pub fn validate(&self) -> Result<(), AppError> {
        self.greeting
            .validate()
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;
        self.greeting.parsed_template()?;
        Ok(())
    }
}
