//! Vehicle inventory / application-intake partner client
//!
//! Two calls: listing the partner's vehicle inventory, and submitting a
//! freshly created application. Submissions go as a JSON body (the
//! form-encoded variant of this contract is retired). Non-2xx responses
//! and transport failures both surface as `Unavailable`; the partner has
//! no meaningful not-found case.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use core_kernel::PortError;
use domain_lending::ports::VehiclePartner;
use domain_lending::{LoanApplication, Vehicle};

use crate::config::{PartnerConfig, PartnerError};

/// HTTP client for the vehicle partner
#[derive(Debug, Clone)]
pub struct AutoMarketClient {
    http: Client,
    base_url: String,
    token: String,
}

impl AutoMarketClient {
    /// Builds the client with the configured timeout applied to every
    /// request. The caller's cancellation propagates by dropping the
    /// in-flight future.
    pub fn new(config: PartnerConfig) -> Result<Self, PartnerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VehiclePartner for AutoMarketClient {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
        let url = format!("{}/vehicles", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| PortError::unavailable(format!("vehicle partner request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortError::unavailable(format!(
                "vehicle partner returned status {status}"
            )));
        }

        response
            .json::<Vec<Vehicle>>()
            .await
            .map_err(|e| PortError::unavailable(format!("vehicle partner response malformed: {e}")))
    }

    async fn submit_application(&self, application: &LoanApplication) -> Result<(), PortError> {
        let url = format!("{}/loan-application", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(application)
            .send()
            .await
            .map_err(|e| PortError::unavailable(format!("vehicle partner request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortError::unavailable(format!(
                "vehicle partner returned status {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_config() {
        let client = AutoMarketClient::new(PartnerConfig {
            base_url: "https://autos.example.com/api".to_string(),
            token: "secret".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(client.base_url(), "https://autos.example.com/api");
    }
}
