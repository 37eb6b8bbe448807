//! The admin-service HTTP port: inventory fetches and enact dispatches.

use async_trait::async_trait;

use crate::domain::error::AgentError;
use crate::domain::models::{ScheduledChange, V1Class, V2Release};

/// Typed requester against the admin service.
///
/// A real implementation is a thin `reqwest`-backed adapter handling auth,
/// transport errors, and JSON decoding (see
/// `infrastructure::admin_client::http::HttpAdminClient`). Tests substitute
/// an in-memory fake or a `mockito`-backed instance of the real adapter.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Fetch the admin service's top-level scheduled-change overview.
    ///
    /// This is a cheap existence probe issued once per cycle, ahead of the
    /// six per-class inventory fetches: the per-class endpoints only ever
    /// return their own class's pending changes, so the agent cannot tell
    /// from them alone whether the admin service's scheduled-change
    /// subsystem as a whole is reachable. A failure here does not prevent
    /// the per-class fetches from being attempted. Its response carries no
    /// planning-relevant data.
    async fn fetch_scheduled_changes_overview(&self) -> Result<(), AgentError>;

    /// Fetch the current inventory for one v1 endpoint class.
    async fn fetch_v1_class(&self, class: V1Class) -> Result<Vec<ScheduledChange>, AgentError>;

    /// Fetch the current v2 release inventory.
    async fn fetch_v2_releases(&self) -> Result<Vec<V2Release>, AgentError>;

    /// Enact a single v1 scheduled change.
    async fn enact_v1(&self, class: V1Class, sc_id: i64) -> Result<(), AgentError>;

    /// Enact a v2 release's aggregate of currently pending changes.
    async fn enact_v2_release(&self, name: &str) -> Result<(), AgentError>;
}
