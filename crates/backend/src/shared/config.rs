use chrono::NaiveDate;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::a001_sales_transaction::generator::{GeneratorError, GeneratorSettings};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the compiled frontend, served for every non-API path
    pub static_dir: String,
}

/// Parameters of the synthetic sales dataset
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub seed: u64,
    pub records: usize,
    pub first_order_number: u32,
    pub start_date: NaiveDate,
    pub revenue_base: f64,
    pub revenue_span: f64,
    pub quantity_min: u32,
    pub quantity_max: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server host '{0}'")]
    InvalidHost(String),

    #[error("server port must not be 0")]
    InvalidPort,

    #[error("static_dir must not be empty")]
    EmptyStaticDir,

    #[error("invalid dataset settings: {0}")]
    Dataset(#[from] GeneratorError),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[dataset]
seed = 42
records = 500
first_order_number = 100
start_date = "2023-01-01"
revenue_base = 50.0
revenue_span = 1000.0
quantity_min = 1
quantity_max = 9
"#;

impl Config {
    /// Check every section, including the generator settings derived from `[dataset]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if self.server.static_dir.trim().is_empty() {
            return Err(ConfigError::EmptyStaticDir);
        }
        self.dataset.generator_settings().validate()?;
        Ok(())
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }
}

impl DatasetConfig {
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            seed: self.seed,
            records: self.records,
            first_order_number: self.first_order_number,
            start_date: self.start_date,
            revenue_base: self.revenue_base,
            revenue_span: self.revenue_span,
            quantity_min: self.quantity_min,
            quantity_max: self.quantity_max,
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                config.validate()?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.dataset.records, 500);
        assert_eq!(
            config.dataset.start_date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = default_config().unwrap();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn test_rejects_bad_host() {
        let mut config = default_config().unwrap();
        config.server.host = "localhost:80".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_rejects_bad_dataset() {
        let mut config = default_config().unwrap();
        config.dataset.quantity_min = 5;
        config.dataset.quantity_max = 2;
        assert!(matches!(config.validate(), Err(ConfigError::Dataset(_))));
    }
}
