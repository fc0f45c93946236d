//! Partner client configuration

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while constructing a partner client
#[derive(Debug, Error)]
pub enum PartnerError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Connection settings for one partner HTTP service
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerConfig {
    /// Base URL without a trailing slash, e.g. "https://partner.example.com/api"
    pub base_url: String,
    /// Bearer token presented on every request
    pub token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_string(),
            token: String::new(),
            timeout_secs: 10,
        }
    }
}
