//! API configuration

use serde::Deserialize;

use infra_partners::{BrokerConfig, PartnerConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Database pool upper bound
    pub database_max_connections: u32,
    /// Database pool lower bound
    pub database_min_connections: u32,
    /// Log level
    pub log_level: String,
    /// Message broker connection settings
    pub broker: BrokerConfig,
    /// Vehicle marketplace partner
    pub auto_market: PartnerConfig,
    /// Leasing partner (connectivity only, no calls yet)
    pub leasing: PartnerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/lending".to_string(),
            database_max_connections: 10,
            database_min_connections: 2,
            log_level: "info".to_string(),
            broker: BrokerConfig::default(),
            auto_market: PartnerConfig::default(),
            leasing: PartnerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Scalar fields map from `APP_*` variables; nested sections use a
    /// double underscore, e.g. `APP_BROKER__HOST`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_bindable_addr() {
        let config = AppConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.broker.port, 5672);
    }
}
