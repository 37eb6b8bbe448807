//! Infrastructure layer: adapters for the ports the domain defines.
//!
//! - HTTP clients for the admin service and the telemetry service.
//! - Configuration loading (`figment`-backed hierarchical merge).
//! - Logging/observability setup (`tracing`-backed).

pub mod admin_client;
pub mod config;
pub mod logging;
pub mod telemetry_client;
