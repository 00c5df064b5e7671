//! Session-scoped settings store layering pending edits over fetched state.

use serde_json::{Map, Value};

use crate::settings::{
    merge::merge,
    pending::{ChangeTracker, PendingValue},
};

/// Holds the last-known-good settings for one guild plus a pending overlay.
///
/// The store is plain context-passed state owned by whoever is editing a
/// guild's configuration (one request, one editing session); there is no
/// process-global instance. The merged view is recomputed on every read and
/// never cached.
#[derive(Debug, Default, Clone)]
pub struct SettingsStore {
    base: Map<String, Value>,
    tracker: ChangeTracker,
}

impl SettingsStore {
    /// Creates a store over server-fetched settings with no pending edits.
    pub fn new(base: Map<String, Value>) -> Self {
        Self {
            base,
            tracker: ChangeTracker::new(),
        }
    }

    /// The last-known-good settings without any pending overlay.
    pub fn base(&self) -> &Map<String, Value> {
        &self.base
    }

    /// Mutable access to the pending-change tracker.
    pub fn tracker(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }

    /// True iff there are unsubmitted edits.
    pub fn has_changes(&self) -> bool {
        self.tracker.has_changes()
    }

    /// Computes the merged view: base settings with pending edits applied.
    ///
    /// `Set` edits deep-merge over the base (arrays replacing wholesale);
    /// `Clear` tombstones remove the field entirely so the serialized view
    /// falls back to the schema default.
    pub fn merged(&self) -> Map<String, Value> {
        let Some(pending) = self.tracker.pending() else {
            return self.base.clone();
        };

        let mut overlay = Map::new();
        for (key, value) in pending {
            if let PendingValue::Set(value) = value {
                overlay.insert(key.clone(), value.clone());
            }
        }

        let mut merged = merge(&self.base, Some(&overlay));

        for (key, value) in pending {
            if matches!(value, PendingValue::Clear) {
                merged.remove(key);
            }
        }

        merged
    }

    /// Replaces the base with the server's canonical settings and drops the
    /// pending overlay.
    ///
    /// Called after a successful submit; on failure the overlay is left
    /// intact so the edit can be retried.
    pub fn commit(&mut self, canonical: Map<String, Value>) {
        self.base = canonical;
        self.tracker.discard_all();
    }

    /// Converts the pending change set into submit-ready `(key, value)`
    /// pairs, with `Clear` tombstones encoded as JSON `null`.
    pub fn to_write_pairs(&self) -> Vec<(String, Value)> {
        let Some(pending) = self.tracker.pending() else {
            return Vec::new();
        };

        pending
            .iter()
            .map(|(key, value)| match value {
                PendingValue::Clear => (key.clone(), Value::Null),
                PendingValue::Set(value) => (key.clone(), value.clone()),
            })
            .collect()
    }
}
