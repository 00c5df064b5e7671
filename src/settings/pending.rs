//! Pending-change tracking for unsaved settings edits.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single pending edit for a settings field.
///
/// The two states are deliberately distinct: `Clear` is an explicit tombstone
/// telling the server to reset the field to its default/absence, while the
/// complete absence of an entry in the tracker means "no pending change".
/// Conflating the two (a JSON `null` doing double duty) is exactly the
/// ambiguity this type exists to remove.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingValue {
    /// Reset the field to its default/absence on submit.
    Clear,
    /// Replace the field with this value on submit.
    Set(Value),
}

/// The set of pending field edits, keyed by settings field name.
///
/// Always non-empty by construction: the [`ChangeTracker`] collapses an
/// emptied map back to the absent sentinel instead of holding `{}`.
pub type PendingChanges = BTreeMap<String, PendingValue>;

/// Records and undoes field-level pending edits.
///
/// The tracker owns an `Option<PendingChanges>` where `None` is the "no
/// changes" sentinel. Because empty maps never persist, [`has_changes`]
/// is a constant-time presence check rather than a scan.
///
/// [`has_changes`]: ChangeTracker::has_changes
#[derive(Debug, Default, Clone)]
pub struct ChangeTracker {
    pending: Option<PendingChanges>,
}

impl ChangeTracker {
    /// Creates an empty tracker (no pending changes).
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Records a pending value for a field.
    ///
    /// A JSON `null` routes to the [`PendingValue::Clear`] tombstone, so a
    /// `null` submitted by a caller always means "explicitly clear this
    /// field" rather than "no change". To drop a pending edit without
    /// contacting the server, use [`discard`] instead.
    ///
    /// [`discard`]: ChangeTracker::discard
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let pending = match value {
            Value::Null => PendingValue::Clear,
            value => PendingValue::Set(value),
        };
        self.pending
            .get_or_insert_with(PendingChanges::new)
            .insert(key.into(), pending);
    }

    /// Records an explicit reset tombstone for a field.
    ///
    /// On submit the server clears the field; this is not the same as
    /// [`discard`], which abandons the pending edit locally.
    ///
    /// [`discard`]: ChangeTracker::discard
    pub fn clear(&mut self, key: impl Into<String>) {
        self.pending
            .get_or_insert_with(PendingChanges::new)
            .insert(key.into(), PendingValue::Clear);
    }

    /// Drops the pending edit for a field without contacting the server.
    ///
    /// When the last pending key is removed the tracker collapses back to
    /// the absent sentinel, never an empty map.
    pub fn discard(&mut self, key: &str) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        pending.remove(key);

        if pending.is_empty() {
            self.pending = None;
        }
    }

    /// Drops every pending edit.
    ///
    /// Implemented as repeated single-key [`discard`] so the collapse
    /// invariant lives in exactly one code path.
    ///
    /// [`discard`]: ChangeTracker::discard
    pub fn discard_all(&mut self) {
        let keys: Vec<String> = self
            .pending
            .as_ref()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();

        for key in keys {
            self.discard(&key);
        }
    }

    /// True iff at least one field has a pending edit.
    pub fn has_changes(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending change set, or `None` when there are no changes.
    pub fn pending(&self) -> Option<&PendingChanges> {
        self.pending.as_ref()
    }
}
