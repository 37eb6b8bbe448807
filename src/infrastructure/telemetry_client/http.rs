//! Telemetry uptake client. The wire contract is opaque to the decision
//! core (§6); only this adapter needs to know the telemetry service's
//! response shape.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::error::AgentError;
use crate::domain::ports::TelemetryOracle;

#[derive(Debug, Deserialize)]
struct UptakeResponse {
    uptake: f64,
}

/// `TelemetryOracle` implementation backed by `reqwest`.
pub struct HttpTelemetryOracle {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTelemetryOracle {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TelemetryOracle for HttpTelemetryOracle {
    #[tracing::instrument(skip(self))]
    async fn get_uptake(&self, product: &str, channel: &str) -> Result<f64, AgentError> {
        let url = format!(
            "{}/uptake?product={product}&channel={channel}",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AgentError::Predicate {
                product: product.to_string(),
                channel: channel.to_string(),
                reason: source.to_string(),
            })?;
        let response = response
            .error_for_status()
            .map_err(|source| AgentError::Predicate {
                product: product.to_string(),
                channel: channel.to_string(),
                reason: source.to_string(),
            })?;
        let body: UptakeResponse =
            response
                .json()
                .await
                .map_err(|source| AgentError::Predicate {
                    product: product.to_string(),
                    channel: channel.to_string(),
                    reason: source.to_string(),
                })?;
        Ok(body.uptake)
    }
}
