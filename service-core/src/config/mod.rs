use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// HTTP listener settings shared by every service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Resolve `<service_dir>/config` whether the process runs from the workspace
/// root or from inside the service directory.
pub fn configuration_directory(service_dir: &str) -> Result<PathBuf, AppError> {
    let base_path = std::env::current_dir()?;

    Ok(if base_path.ends_with(service_dir) {
        base_path.join("config")
    } else {
        base_path.join(service_dir).join("config")
    })
}

/// `APP_SERVER__PORT=9000` maps to `server.port`; values are parsed into
/// numbers and booleans where possible.
pub fn environment_source() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Load layered settings: `config/base.yaml` (optional), then `APP_*` env vars
/// with `__` as the nesting separator.
pub fn load<T: DeserializeOwned>(service_dir: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let base = configuration_directory(service_dir)?.join("base.yaml");

    let settings = Cfg::builder()
        .add_source(File::from(base).required(false))
        .add_source(environment_source())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_source() {
        let config: Config = Cfg::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn environment_source_nests_and_parses() {
        let vars = [
            ("APP_SERVER__PORT", "9000"),
            ("APP_SERVER__HOST", "127.0.0.1"),
            ("OTHER_SERVER__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        #[derive(Deserialize)]
        struct Settings {
            server: Config,
        }

        let settings: Settings = Cfg::builder()
            .add_source(environment_source().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn configuration_directory_appends_service_dir() {
        let dir = configuration_directory("some-service").unwrap();
        assert!(dir.ends_with("some-service/config"));
    }
}
