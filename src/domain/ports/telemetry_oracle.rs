//! The injected telemetry query used by telemetry-readiness evaluation.

use async_trait::async_trait;

use crate::domain::error::AgentError;

/// Answers "what fraction of the `(product, channel)` population has
/// taken up this change" queries.
///
/// Calls are injected rather than hard-wired so the readiness oracle
/// stays a pure function of its inputs in tests, and so that a single
/// telemetry failure degrades to "not ready" rather than aborting the
/// cycle (see `AgentError::Predicate`).
#[async_trait]
pub trait TelemetryOracle: Send + Sync {
    /// Returns the observed uptake fraction (0.0-1.0, or a service-defined
    /// percentage scale matching `telemetry_uptake` on the SC) for the
    /// given product and channel.
    async fn get_uptake(&self, product: &str, channel: &str) -> Result<f64, AgentError>;
}
