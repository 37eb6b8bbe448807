//! The dispatch plan: an ordered sequence of enact operations produced by
//! the v1 and v2 planners and consumed by the cycle driver.

use crate::domain::models::V1Class;

/// One enact operation, already ordered relative to its siblings by the
/// planner that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnactOp {
    V1 { class: V1Class, sc_id: i64 },
    V2Release { name: String },
}
