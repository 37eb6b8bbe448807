//! The readiness oracle: time-readiness and telemetry-readiness, both
//! always evaluated for any SC that reaches the planner.

use crate::domain::models::ScheduledChange;
use crate::domain::ports::TelemetryOracle;

/// An SC is time-ready iff `when` is absent, or `when <= now_ms`.
pub fn time_is_ready(sc: &ScheduledChange, now_ms: i64) -> bool {
    sc.when.is_none_or(|when| when <= now_ms)
}

/// An SC is telemetry-ready iff it carries no telemetry predicate, or the
/// observed uptake for `(product, channel)` meets the threshold.
///
/// A telemetry-oracle failure is conservative: it counts as not ready
/// rather than propagating, matching `AgentError::Predicate`'s contract.
pub async fn telemetry_is_ready(sc: &ScheduledChange, oracle: &dyn TelemetryOracle) -> bool {
    if !sc.has_telemetry_predicate() {
        return true;
    }
    let (Some(product), Some(channel), Some(threshold)) = (
        sc.telemetry_product.as_deref(),
        sc.telemetry_channel.as_deref(),
        sc.telemetry_uptake,
    ) else {
        return true;
    };
    match oracle.get_uptake(product, channel).await {
        Ok(uptake) => uptake >= threshold,
        Err(_) => false,
    }
}

/// An SC is ready iff it is both time-ready and telemetry-ready.
///
/// Both predicates are always evaluated — this function never
/// short-circuits on time-readiness alone, so callers that count oracle
/// invocations (tests included) see both calls for every SC.
pub async fn is_ready(sc: &ScheduledChange, now_ms: i64, oracle: &dyn TelemetryOracle) -> bool {
    let time_ready = time_is_ready(sc, now_ms);
    let telemetry_ready = telemetry_is_ready(sc, oracle).await;
    time_ready && telemetry_ready
}
