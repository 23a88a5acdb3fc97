//! Interaction history store abstraction.

use async_trait::async_trait;

use crate::common::InteractionId;
use crate::error::HistoryResult;
use crate::types::NewInteraction;

/// Append-only store for completed assisted-contact interactions.
///
/// One record per successful generation. There is no idempotency key: a
/// caller retry after a persistence failure is a fresh user action and
/// may legitimately create a second record.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist one interaction; the store assigns id and timestamp.
    async fn create(&self, record: NewInteraction) -> HistoryResult<InteractionId>;
}
