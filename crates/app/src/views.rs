//! View invalidation

use async_trait::async_trait;
use mockall::automock;
use showcase::views::StaleViews;
use tracing::debug;

/// Marks rendered pages stale so they are rebuilt on next access.
///
/// Invalidation is best effort: it cannot fail the mutation that triggered it.
#[automock]
#[async_trait]
pub trait ViewInvalidator: Send + Sync {
    /// Mark every page in `views` stale.
    async fn invalidate(&self, views: StaleViews);
}

/// Invalidator for deployments without a page cache. Records each stale path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingViewInvalidator;

#[async_trait]
impl ViewInvalidator for TracingViewInvalidator {
    async fn invalidate(&self, views: StaleViews) {
        for view in views.iter() {
            debug!(path = %view, "view marked stale");
        }
    }
}
