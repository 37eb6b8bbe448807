//! The v1 enactment planner: orders ready, signed-off SCs within one
//! endpoint class and emits per-SC enact operations.

use crate::domain::models::{ScheduledChange, V1Class};
use crate::domain::ports::TelemetryOracle;
use crate::services::plan::EnactOp;
use crate::services::readiness::is_ready;
use crate::services::signoff::verify_signoffs;

/// Sort a class's SCs into dispatch order.
///
/// Rules sort by `(when descending, priority descending, sc_id ascending)`:
/// `when` is the dominant key, and `priority` only breaks a tie between
/// rules sharing the same `when` (an absent priority treated as `i64::MIN`,
/// lowest, within that tie). This is not a pure priority-first order —
/// two rules with different `when` never have their relative order
/// decided by `priority` at all. Every other class sorts by
/// `(when ascending, sc_id ascending)`; `Option<i64>`'s natural ordering
/// already puts an absent `when` first, which is correct since an absent
/// `when` is always time-ready.
pub fn sort_class(class: V1Class, scs: &mut [ScheduledChange]) {
    if class.is_rules() {
        scs.sort_by(|a, b| {
            b.when
                .cmp(&a.when)
                .then(b.priority_or_lowest().cmp(&a.priority_or_lowest()))
                .then(a.sc_id.cmp(&b.sc_id))
        });
    } else {
        scs.sort_by(|a, b| a.when.cmp(&b.when).then(a.sc_id.cmp(&b.sc_id)));
    }
}

/// Plan the dispatch order for one v1 endpoint class.
///
/// For each SC in sorted order: evaluate readiness (skip if not ready,
/// without checking sign-offs), then evaluate sign-offs (skip if not
/// satisfied), then emit an enact operation. An error from one SC's
/// enactment never prevents evaluation of later SCs; this function only
/// builds the plan, dispatch error isolation is the cycle driver's job.
pub async fn plan_class(
    class: V1Class,
    mut scs: Vec<ScheduledChange>,
    now_ms: i64,
    oracle: &dyn TelemetryOracle,
) -> Vec<EnactOp> {
    sort_class(class, &mut scs);

    let mut ops = Vec::new();
    for sc in &scs {
        if !is_ready(sc, now_ms, oracle).await {
            continue;
        }
        if !verify_signoffs(&sc.required_signoffs, &sc.signoffs) {
            continue;
        }
        ops.push(EnactOp::V1 {
            class,
            sc_id: sc.sc_id,
        });
    }
    ops
}
