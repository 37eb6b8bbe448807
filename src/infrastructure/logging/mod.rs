//! Logging/observability infrastructure built on `tracing`.
//!
//! Structured, per-cycle summary logging plus a secret-scrubbing layer so
//! admin-service credentials never reach log output in full.

pub mod config;
pub mod logger;
pub mod rotation;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
