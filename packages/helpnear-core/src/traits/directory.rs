//! Provider directory abstraction.

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::types::Provider;

/// Read-only source of the provider collection.
///
/// The directory is owned externally; this crate never creates, updates,
/// or deletes providers. No pagination contract is assumed - `list`
/// returns the full collection. A failed load propagates as
/// [`DirectoryError::Load`](crate::error::DirectoryError::Load) and the
/// UI falls back to its empty state.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Fetch all providers.
    async fn list(&self) -> DirectoryResult<Vec<Provider>>;
}
