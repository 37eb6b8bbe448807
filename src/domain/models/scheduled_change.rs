//! The v1 scheduled-change record and its readiness-relevant fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A scheduled change against one of the v1 endpoint classes.
///
/// Fields that are absent in the admin service's JSON (rather than
/// `null`) deserialize to `None`/empty collections by virtue of `#[serde(default)]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledChange {
    pub sc_id: i64,

    /// Milliseconds since epoch. Absent means "always time-ready".
    #[serde(default)]
    pub when: Option<i64>,

    /// Telemetry triple: present together or absent together.
    #[serde(default)]
    pub telemetry_uptake: Option<f64>,
    #[serde(default)]
    pub telemetry_product: Option<String>,
    #[serde(default)]
    pub telemetry_channel: Option<String>,

    /// user -> role.
    #[serde(default)]
    pub signoffs: HashMap<String, String>,

    /// role -> required count.
    #[serde(default)]
    pub required_signoffs: HashMap<String, u32>,

    /// Only meaningful for the `rules` class. Absent sorts as lowest priority.
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ScheduledChange {
    /// Whether this SC carries a telemetry predicate at all.
    pub fn has_telemetry_predicate(&self) -> bool {
        self.telemetry_uptake.is_some()
            || self.telemetry_product.is_some()
            || self.telemetry_channel.is_some()
    }

    /// `priority` for sort purposes: absent priority sorts as `i64::MIN`,
    /// i.e. lowest. This is the only field in the model with an implicit
    /// default value baked into ordering rather than behavior.
    pub fn priority_or_lowest(&self) -> i64 {
        self.priority.unwrap_or(i64::MIN)
    }
}
