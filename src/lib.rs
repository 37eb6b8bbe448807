//! Autonomous enactment agent for a release-management admin service.
//!
//! The agent polls the admin service for scheduled changes across six v1
//! endpoint classes and a v2 hierarchical release surface, decides which
//! are now ready and signed off, and dispatches their enactment in a
//! fixed cross-class order. See `services::cycle` for the driver.

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::error::AgentError;
