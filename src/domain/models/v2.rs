//! The v2 release scheduling surface: hierarchical aggregates of
//! scheduled changes that enact as a single atomic unit.

use super::scheduled_change::ScheduledChange;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One pending change within a v2 release.
///
/// Carries the same readiness/sign-off fields as a v1 SC, plus a `path`
/// selector into the release's structure (absent for the whole-release
/// "root" change) and a `change_type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct V2ScheduledChange {
    #[serde(flatten)]
    pub base: ScheduledChange,

    /// Dotted selector into the release's data, absent on the root change.
    #[serde(default)]
    pub path: Option<String>,

    pub change_type: ChangeType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Insert,
    Update,
    Delete,
}

/// A v2 release: a named aggregate of pending `scheduled_changes`, all of
/// which must be ready and signed off for the release to enact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct V2Release {
    pub name: String,
    pub product: String,
    pub data_version: i64,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub rule_info: HashMap<String, serde_json::Value>,

    #[serde(default)]
    pub scheduled_changes: Vec<V2ScheduledChange>,

    #[serde(default)]
    pub product_required_signoffs: HashMap<String, u32>,
    #[serde(default)]
    pub required_signoffs: HashMap<String, u32>,
}
