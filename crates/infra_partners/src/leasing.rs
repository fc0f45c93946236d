//! Leasing partner client
//!
//! Wired into startup but carries no operations yet; it exists so the
//! connection settings are validated at boot rather than on first use.
//! Kept inert on purpose until a concrete leasing requirement emerges.

use std::time::Duration;

use reqwest::Client;

use crate::config::{PartnerConfig, PartnerError};

/// HTTP client for the leasing partner (no operations yet)
#[derive(Debug, Clone)]
pub struct LeasingClient {
    _http: Client,
    base_url: String,
}

impl LeasingClient {
    pub fn new(config: PartnerConfig) -> Result<Self, PartnerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            _http: http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
