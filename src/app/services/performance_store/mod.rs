//! Performance store service for record reconciliation
//!
//! The same class offering can be printed on several pages of a report, and
//! re-parsed documents repeat offerings wholesale. The store reconciles
//! records by offering identity with last-write-wins semantics on the count
//! fields, and keeps records ordered by key so exports are deterministic.

use crate::app::models::{Performance, RecordKey};
use std::collections::BTreeMap;

pub mod export;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use export::ExportFormat;

/// Result of reconciling one record into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the key
    Inserted,

    /// An existing record's counts were replaced
    Updated,
}

/// Keyed store of reconciled performance records
#[derive(Debug, Clone, Default)]
pub struct PerformanceStore {
    /// Records indexed by offering identity, iterated in key order
    records: BTreeMap<RecordKey, Performance>,

    /// Reconciliation statistics
    stats: StoreStats,
}

/// Statistics about store reconciliation
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct StoreStats {
    /// Records inserted for a previously unseen key
    pub records_inserted: usize,

    /// Records that replaced the counts of an existing key
    pub records_updated: usize,
}

impl StoreStats {
    /// Total number of upserts performed
    pub fn total_upserts(&self) -> usize {
        self.records_inserted + self.records_updated
    }

    /// Get a summary string of the reconciliation
    pub fn summary(&self) -> String {
        format!(
            "{} records reconciled ({} inserted, {} updated)",
            self.total_upserts(),
            self.records_inserted,
            self.records_updated
        )
    }
}

impl PerformanceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile a record into the store
    ///
    /// The last record seen for a key wins: its counts replace whatever was
    /// stored before.
    pub fn upsert(&mut self, record: Performance) -> UpsertOutcome {
        let key = record.key();

        if self.records.insert(key, record).is_some() {
            self.stats.records_updated += 1;
            UpsertOutcome::Updated
        } else {
            self.stats.records_inserted += 1;
            UpsertOutcome::Inserted
        }
    }

    /// Look up the record stored for a key
    pub fn get(&self, key: &RecordKey) -> Option<&Performance> {
        self.records.get(key)
    }

    /// Number of distinct offerings in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in key order
    pub fn records(&self) -> impl Iterator<Item = &Performance> {
        self.records.values()
    }

    /// Reconciliation statistics
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }
}
