//! Message broker connectivity
//!
//! The service opens an AMQP connection at startup so broker problems are
//! caught at boot, but nothing publishes or consumes on it yet. A future
//! asynchronous notification path (e.g. application-created events) would
//! hang off this connection.

use lapin::{Connection, ConnectionProperties};
use serde::Deserialize;
use tracing::info;

/// AMQP connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5672,
            user: "guest".to_string(),
            password: "guest".to_string(),
        }
    }
}

impl BrokerConfig {
    /// The amqp:// URL for this configuration
    pub fn url(&self) -> String {
        format!(
            "amqp://{}:{}@{}:{}/%2f",
            self.user, self.password, self.host, self.port
        )
    }
}

/// Opens the broker connection.
pub async fn connect(config: &BrokerConfig) -> Result<Connection, lapin::Error> {
    let connection = Connection::connect(&config.url(), ConnectionProperties::default()).await?;
    info!(host = %config.host, port = config.port, "message broker connection established");
    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_credentials_and_vhost() {
        let config = BrokerConfig {
            host: "mq.internal".to_string(),
            port: 5673,
            user: "svc".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(config.url(), "amqp://svc:pw@mq.internal:5673/%2f");
    }
}
