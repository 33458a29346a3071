//! Per-key hour accumulation.
//!
//! Every screen that splits hours by user, task or project uses the same
//! accumulator. The map is ordered so iteration and serialization are
//! deterministic for any key type.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::time_entry::TimeEntry;

/// Accumulated hours and contributing entries for one breakdown key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakdownSlot {
    /// Hours accumulated under this key
    pub total_hours: f64,
    /// Contributing entries, in arrival order
    pub entries: Vec<TimeEntry>,
}

/// Hours grouped by an arbitrary key (user, task or project id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown<K: Ord>(BTreeMap<K, BreakdownSlot>);

// Derived Default would demand K: Default; an empty map needs no such thing.
impl<K: Ord> Default for Breakdown<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Breakdown<K> {
    /// Create an empty breakdown.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Fold one entry into the slot for `key`.
    pub fn add(&mut self, key: K, entry: &TimeEntry) {
        let slot = self.0.entry(key).or_default();
        slot.total_hours += entry.hours;
        slot.entries.push(entry.clone());
    }

    /// The slot for `key`, if any entry was recorded under it.
    pub fn get(&self, key: &K) -> Option<&BreakdownSlot> {
        self.0.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate slots in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &BreakdownSlot)> {
        self.0.iter()
    }

    /// Sum of all slots.
    pub fn total_hours(&self) -> f64 {
        self.0.values().map(|slot| slot.total_hours).sum()
    }
}

impl<K: Ord + Clone> Breakdown<K> {
    /// Rows ordered for display: hours descending, key ascending on ties.
    pub fn ranked(&self) -> Vec<RankedRow<K>> {
        let mut rows: Vec<RankedRow<K>> = self
            .0
            .iter()
            .map(|(key, slot)| RankedRow {
                key: key.clone(),
                total_hours: slot.total_hours,
                entry_count: slot.entries.len(),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_hours
                .partial_cmp(&a.total_hours)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        });
        rows
    }
}

/// One breakdown row ranked for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow<K> {
    /// Breakdown key
    pub key: K,
    /// Hours accumulated under the key
    pub total_hours: f64,
    /// Number of contributing entries
    pub entry_count: usize,
}
