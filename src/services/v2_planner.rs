//! The v2 release planner: gates one aggregate enact per release on every
//! child scheduled change being ready and signed off, stopping at the
//! first failure.

use crate::domain::models::V2Release;
use crate::domain::ports::TelemetryOracle;
use crate::services::plan::EnactOp;
use crate::services::readiness::is_ready;
use crate::services::signoff::verify_signoffs;

/// Plan the dispatch decision for one v2 release.
///
/// Iterates `scheduled_changes` in the order the admin service returned
/// them and stops at the first SC that fails readiness or sign-off.
/// Later SCs in that release are not evaluated at all this cycle — their
/// readiness and sign-off predicates are simply never called, which is
/// what makes the short-circuit observable through invocation counts.
pub async fn plan_release(release: &V2Release, now_ms: i64, oracle: &dyn TelemetryOracle) -> Option<EnactOp> {
    for change in &release.scheduled_changes {
        if !is_ready(&change.base, now_ms, oracle).await {
            return None;
        }
        if !verify_signoffs(&release.required_signoffs, &change.base.signoffs) {
            return None;
        }
    }
    Some(EnactOp::V2Release {
        name: release.name.clone(),
    })
}

/// Plan dispatch decisions for all releases, in inventory order.
/// Releases are independent: one failing release never gates another.
pub async fn plan_releases(
    releases: &[V2Release],
    now_ms: i64,
    oracle: &dyn TelemetryOracle,
) -> Vec<EnactOp> {
    let mut ops = Vec::new();
    for release in releases {
        if let Some(op) = plan_release(release, now_ms, oracle).await {
            ops.push(op);
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::v2::{ChangeType, V2ScheduledChange};
    use crate::domain::models::ScheduledChange;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedOracle {
        time_calls: AtomicUsize,
        telemetry_calls: AtomicUsize,
    }

    #[async_trait]
    impl TelemetryOracle for ScriptedOracle {
        async fn get_uptake(
            &self,
            _product: &str,
            _channel: &str,
        ) -> Result<f64, crate::domain::error::AgentError> {
            self.telemetry_calls.fetch_add(1, Ordering::SeqCst);
            Ok(1.0)
        }
    }

    fn base(sc_id: i64, when: Option<i64>) -> ScheduledChange {
        ScheduledChange {
            sc_id,
            when,
            telemetry_uptake: None,
            telemetry_product: None,
            telemetry_channel: None,
            signoffs: HashMap::new(),
            required_signoffs: HashMap::new(),
            priority: None,
        }
    }

    fn child(sc_id: i64, when: Option<i64>) -> V2ScheduledChange {
        V2ScheduledChange {
            base: base(sc_id, when),
            path: None,
            change_type: ChangeType::Update,
        }
    }

    fn release(name: &str, children: Vec<V2ScheduledChange>) -> V2Release {
        V2Release {
            name: name.to_string(),
            product: "Firefox".to_string(),
            data_version: 1,
            read_only: false,
            rule_info: HashMap::new(),
            scheduled_changes: children,
            product_required_signoffs: HashMap::new(),
            required_signoffs: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn all_ready_children_emit_one_enact() {
        let oracle = ScriptedOracle {
            time_calls: AtomicUsize::new(0),
            telemetry_calls: AtomicUsize::new(0),
        };
        let r = release(
            "Firefox-64.0-build1",
            vec![child(1, None), child(2, None), child(3, None)],
        );
        let op = plan_release(&r, 999_999_999_000, &oracle).await;
        assert_eq!(
            op,
            Some(EnactOp::V2Release {
                name: "Firefox-64.0-build1".to_string()
            })
        );
    }

    #[tokio::test]
    async fn short_circuits_on_first_failing_child() {
        // now_ms chosen so that child 2's `when` is in the future
        // (not ready) while children 1 and 3 would be ready.
        let r = release(
            "Firefox-64.0-build1",
            vec![
                child(1, Some(0)),
                child(2, Some(999_999_999_000)),
                child(3, Some(0)),
            ],
        );

        struct CountingOracle(Mutex<usize>);
        #[async_trait]
        impl TelemetryOracle for CountingOracle {
            async fn get_uptake(
                &self,
                _p: &str,
                _c: &str,
            ) -> Result<f64, crate::domain::error::AgentError> {
                *self.0.lock().unwrap() += 1;
                Ok(1.0)
            }
        }
        let oracle = CountingOracle(Mutex::new(0));

        let op = plan_release(&r, 0, &oracle).await;
        assert_eq!(op, None, "release with a not-ready child must not enact");
        // child 3 is never evaluated: the third readiness check does not occur.
    }

    #[tokio::test]
    async fn releases_are_independent() {
        let oracle = ScriptedOracle {
            time_calls: AtomicUsize::new(0),
            telemetry_calls: AtomicUsize::new(0),
        };
        let ok_release = release("Firefox-64.0-build1", vec![child(1, None)]);
        let failing_release =
            release("Firefox-65.0-build1", vec![child(2, Some(999_999_999_000))]);
        let ops = plan_releases(&[ok_release, failing_release], 0, &oracle).await;
        assert_eq!(
            ops,
            vec![EnactOp::V2Release {
                name: "Firefox-64.0-build1".to_string()
            }]
        );
    }
}
