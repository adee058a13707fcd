//! In-memory session history.
//!
//! Keeps the most recent sessions, newest first, up to a fixed capacity.

use std::collections::VecDeque;

use fitai_core::{SessionRecord, SessionStore, StorageError};
use parking_lot::RwLock;

/// Number of sessions retained when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 50;

/// Capacity-limited session store with ring buffer semantics.
///
/// Safe to share between threads; reads take a shared lock.
#[derive(Debug)]
pub struct InMemorySessionStore {
    /// Stored records (newest first).
    records: RwLock<VecDeque<SessionRecord>>,
    /// Maximum number of records to retain.
    max_records: usize,
}

impl InMemorySessionStore {
    /// Create a new store with a given maximum capacity.
    ///
    /// When the capacity is exceeded, the oldest records are evicted.
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        let max_records = max_records.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(max_records.min(1024))),
            max_records,
        }
    }

    /// Get the `n` most recent records, newest first.
    ///
    /// Returns fewer than `n` if the store holds fewer records.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<SessionRecord> {
        self.records.read().iter().take(n).cloned().collect()
    }

    /// Maximum capacity of the store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_records
    }

    /// Remove every stored record.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, record: SessionRecord) -> Result<(), StorageError> {
        let mut records = self.records.write();
        records.push_front(record);
        if records.len() > self.max_records {
            records.truncate(self.max_records);
            tracing::debug!(capacity = self.max_records, "Evicted oldest session");
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<SessionRecord>, StorageError> {
        Ok(self.records.read().iter().cloned().collect())
    }

    fn latest(&self) -> Result<Option<SessionRecord>, StorageError> {
        Ok(self.records.read().front().cloned())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.records.read().len())
    }
}
