//! Configuration management infrastructure.
//!
//! Hierarchical configuration using `figment`: programmatic defaults,
//! an optional YAML file, environment variables, then CLI flags, each
//! layer overriding the one before it.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
