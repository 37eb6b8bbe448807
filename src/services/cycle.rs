//! The cycle driver: fetches the scheduled-change inventory, runs the
//! planners in the prescribed cross-class order, dispatches enacts
//! sequentially, and sleeps or exits depending on run mode.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::error::AgentError;
use crate::domain::models::V1Class;
use crate::domain::ports::{AdminClient, Clock, TelemetryOracle};
use crate::services::plan::EnactOp;
use crate::services::v1_planner::plan_class;
use crate::services::v2_planner::plan_releases;

/// Per-cycle counters, summarised into a single INFO log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub seen: usize,
    pub ready: usize,
    pub enacted: usize,
    pub skipped_for_signoffs: usize,
    pub errored: usize,
}

/// Drives fetch -> plan -> dispatch -> sleep cycles.
pub struct CycleDriver {
    admin: Arc<dyn AdminClient>,
    telemetry: Arc<dyn TelemetryOracle>,
    clock: Arc<dyn Clock>,
    raise_exceptions: bool,
}

impl CycleDriver {
    pub fn new(
        admin: Arc<dyn AdminClient>,
        telemetry: Arc<dyn TelemetryOracle>,
        clock: Arc<dyn Clock>,
        raise_exceptions: bool,
    ) -> Self {
        Self {
            admin,
            telemetry,
            clock,
            raise_exceptions,
        }
    }

    /// Run continuously, sleeping `interval` between cycles, until a
    /// cancellation signal fires. Returns on cancellation.
    pub async fn run_forever(
        &self,
        interval: Duration,
        cancel: impl std::future::Future<Output = ()>,
    ) -> Result<(), AgentError> {
        tokio::pin!(cancel);
        loop {
            self.run_once().await?;
            tokio::select! {
                () = tokio::time::sleep(interval) => {}
                () = &mut cancel => return Ok(()),
            }
        }
    }

    /// Run exactly one cycle: fetch, plan, dispatch. Used by `--once` and
    /// by tests.
    #[tracing::instrument(skip(self))]
    pub async fn run_once(&self) -> Result<CycleSummary, AgentError> {
        let now_ms = self.clock.now_ms();
        let mut summary = CycleSummary::default();
        let mut ops: Vec<EnactOp> = Vec::new();

        match self.admin.fetch_scheduled_changes_overview().await {
            Ok(()) => {}
            Err(err) if self.raise_exceptions => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "scheduled-change overview probe failed, continuing cycle");
                summary.errored += 1;
            }
        }

        for class in V1Class::DISPATCH_ORDER {
            let scs = match self.admin.fetch_v1_class(class).await {
                Ok(scs) => scs,
                Err(err) if self.raise_exceptions => return Err(err),
                Err(err) => {
                    tracing::warn!(class = %class, error = %err, "inventory fetch failed, skipping class this cycle");
                    summary.errored += 1;
                    continue;
                }
            };
            summary.seen += scs.len();
            let class_ops = plan_class(class, scs, now_ms, self.telemetry.as_ref()).await;
            summary.ready += class_ops.len();
            ops.extend(class_ops);
        }

        let releases = match self.admin.fetch_v2_releases().await {
            Ok(releases) => releases,
            Err(err) if self.raise_exceptions => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "v2 release inventory fetch failed, skipping this cycle");
                summary.errored += 1;
                Vec::new()
            }
        };
        summary.seen += releases
            .iter()
            .map(|r| r.scheduled_changes.len())
            .sum::<usize>();
        let release_ops = plan_releases(&releases, now_ms, self.telemetry.as_ref()).await;
        summary.ready += release_ops.len();
        ops.extend(release_ops);

        for op in ops {
            match self.dispatch(&op).await {
                Ok(()) => summary.enacted += 1,
                Err(err) if self.raise_exceptions => return Err(err),
                Err(err) => {
                    tracing::warn!(op = ?op, error = %err, "enact failed, continuing cycle");
                    summary.errored += 1;
                }
            }
        }

        tracing::info!(
            seen = summary.seen,
            ready = summary.ready,
            enacted = summary.enacted,
            skipped_for_signoffs = summary.skipped_for_signoffs,
            errored = summary.errored,
            "cycle complete"
        );

        Ok(summary)
    }

    async fn dispatch(&self, op: &EnactOp) -> Result<(), AgentError> {
        match op {
            EnactOp::V1 { class, sc_id } => self.admin.enact_v1(*class, *sc_id).await,
            EnactOp::V2Release { name } => self.admin.enact_v2_release(name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ScheduledChange, V2Release};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FixedClock(i64);
    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    struct AlwaysReadyOracle;
    #[async_trait]
    impl TelemetryOracle for AlwaysReadyOracle {
        async fn get_uptake(&self, _p: &str, _c: &str) -> Result<f64, AgentError> {
            Ok(1.0)
        }
    }

    #[derive(Default)]
    struct FakeAdmin {
        inventories: Mutex<HashMap<V1Class, Vec<ScheduledChange>>>,
        releases: Mutex<Vec<V2Release>>,
        enacted: Mutex<Vec<EnactOp>>,
        get_calls: AtomicUsize,
    }

    #[async_trait]
    impl AdminClient for FakeAdmin {
        async fn fetch_scheduled_changes_overview(&self) -> Result<(), AgentError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn fetch_v1_class(
            &self,
            class: V1Class,
        ) -> Result<Vec<ScheduledChange>, AgentError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .inventories
                .lock()
                .unwrap()
                .get(&class)
                .cloned()
                .unwrap_or_default())
        }

        async fn fetch_v2_releases(&self) -> Result<Vec<V2Release>, AgentError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.releases.lock().unwrap().clone())
        }

        async fn enact_v1(&self, class: V1Class, sc_id: i64) -> Result<(), AgentError> {
            self.enacted.lock().unwrap().push(EnactOp::V1 { class, sc_id });
            Ok(())
        }

        async fn enact_v2_release(&self, name: &str) -> Result<(), AgentError> {
            self.enacted
                .lock()
                .unwrap()
                .push(EnactOp::V2Release { name: name.to_string() });
            Ok(())
        }
    }

    #[tokio::test]
    async fn empty_inventories_issue_eight_requests_and_zero_enacts() {
        let admin = Arc::new(FakeAdmin::default());
        let driver = CycleDriver::new(
            admin.clone(),
            Arc::new(AlwaysReadyOracle),
            Arc::new(FixedClock(999_999_999_000)),
            true,
        );
        let summary = driver.run_once().await.unwrap();
        assert_eq!(summary.enacted, 0);
        assert_eq!(admin.get_calls.load(Ordering::SeqCst), 8);
        assert!(admin.enacted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rules_enacts_precede_releases_enacts_in_dispatch_order() {
        let admin = Arc::new(FakeAdmin::default());
        {
            let mut inv = admin.inventories.lock().unwrap();
            inv.insert(
                V1Class::Rules,
                vec![ScheduledChange {
                    sc_id: 1,
                    when: Some(0),
                    telemetry_uptake: None,
                    telemetry_product: None,
                    telemetry_channel: None,
                    signoffs: HashMap::new(),
                    required_signoffs: HashMap::new(),
                    priority: None,
                }],
            );
            inv.insert(
                V1Class::Releases,
                vec![ScheduledChange {
                    sc_id: 2,
                    when: Some(0),
                    telemetry_uptake: None,
                    telemetry_product: None,
                    telemetry_channel: None,
                    signoffs: HashMap::new(),
                    required_signoffs: HashMap::new(),
                    priority: None,
                }],
            );
        }
        let driver = CycleDriver::new(
            admin.clone(),
            Arc::new(AlwaysReadyOracle),
            Arc::new(FixedClock(999_999_999_000)),
            true,
        );
        driver.run_once().await.unwrap();
        let dispatched = admin.enacted.lock().unwrap();
        let rules_idx = dispatched
            .iter()
            .position(|op| matches!(op, EnactOp::V1 { class: V1Class::Rules, .. }))
            .unwrap();
        let releases_idx = dispatched
            .iter()
            .position(|op| matches!(op, EnactOp::V1 { class: V1Class::Releases, .. }))
            .unwrap();
        assert!(rules_idx < releases_idx);
    }
}
