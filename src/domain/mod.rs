//! Domain layer for the enactment agent.
//!
//! This module contains the core decision model: scheduled-change data,
//! the error taxonomy, and the ports (traits) the decision engine depends
//! on without knowing their concrete implementation.

pub mod error;
pub mod models;
pub mod ports;

pub use error::AgentError;
