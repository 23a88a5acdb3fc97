//! In-memory storage implementations for testing and development.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::common::InteractionId;
use crate::error::{DirectoryResult, HistoryResult};
use crate::traits::{HistoryStore, ProviderDirectory};
use crate::types::{InteractionRecord, NewInteraction, Provider};

/// In-memory provider directory.
///
/// Useful for testing, demos, and development. Not suitable for
/// production as data is lost on restart.
#[derive(Default, Clone)]
pub struct MemoryDirectory {
    providers: Arc<RwLock<Vec<Provider>>>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with providers.
    pub fn with_providers(providers: Vec<Provider>) -> Self {
        Self {
            providers: Arc::new(RwLock::new(providers)),
        }
    }

    /// Add a provider.
    pub fn insert(&self, provider: Provider) {
        self.providers.write().unwrap().push(provider);
    }

    /// Remove all providers.
    pub fn clear(&self) {
        self.providers.write().unwrap().clear();
    }

    /// Number of providers in the directory.
    pub fn len(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ProviderDirectory for MemoryDirectory {
    async fn list(&self) -> DirectoryResult<Vec<Provider>> {
        Ok(self.providers.read().unwrap().clone())
    }
}

/// In-memory interaction history.
///
/// Assigns time-ordered V7 ids and Utc timestamps on create, like a
/// production store would. Clones share the same underlying records.
#[derive(Default, Clone)]
pub struct MemoryHistory {
    records: Arc<RwLock<Vec<InteractionRecord>>>,
}

impl MemoryHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records, oldest first.
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.records.read().unwrap().clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn create(&self, record: NewInteraction) -> HistoryResult<InteractionId> {
        let id = InteractionId::new();
        let stored = InteractionRecord::assign(record, id, Utc::now());
        self.records.write().unwrap().push(stored);
        Ok(id)
    }
}
