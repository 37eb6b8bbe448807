//! Error taxonomy for the enactment agent.
//!
//! Errors are classified by how the cycle driver should react to them:
//! retry next cycle, treat a predicate as conservatively failed, or abort
//! before the first cycle ever runs.

use thiserror::Error;

/// Top-level error type produced by the agent's core operations.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A request to the admin service or telemetry service failed at the
    /// transport layer (connection refused, timeout, non-2xx status).
    #[error("transport error against {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The admin service returned a response that did not match the
    /// expected shape for the endpoint queried.
    #[error("malformed response from {endpoint}: {reason}")]
    Structural { endpoint: String, reason: String },

    /// The telemetry oracle could not answer a readiness query.
    #[error("telemetry oracle failed for product={product} channel={channel}: {reason}")]
    Predicate {
        product: String,
        channel: String,
        reason: String,
    },

    /// Configuration was invalid or required collaborators were
    /// unreachable at startup. The agent must abort before its first cycle.
    #[error("fatal configuration error: {0}")]
    FatalConfig(String),
}

impl AgentError {
    /// `StructuralError` is treated as a `TransportError` for the class in
    /// question: both mean "this fetch did not produce usable data".
    pub const fn is_transport_like(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Structural { .. })
    }

    /// `PredicateError` is conservative: an SC whose telemetry oracle call
    /// failed is treated as not ready, never as ready.
    pub const fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate { .. })
    }

    /// Fatal configuration errors abort the agent before its first cycle.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::FatalConfig(_))
    }
}
