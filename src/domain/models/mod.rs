//! Data model for scheduled changes, v1 endpoint classes, v2 releases, and
//! the agent's own configuration.

pub mod config;
pub mod scheduled_change;
pub mod v1_class;
pub mod v2;

pub use scheduled_change::ScheduledChange;
pub use v1_class::V1Class;
pub use v2::{V2Release, V2ScheduledChange};
