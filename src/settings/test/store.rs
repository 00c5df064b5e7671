use super::*;
use crate::settings::store::SettingsStore;

/// Tests the round-trip property: a recorded edit shows up in the merged
/// view regardless of what the base held at that key.
///
/// Expected: merged view yields the pending value at the edited key
#[test]
fn pending_edit_wins_in_merged_view() {
    let mut store = SettingsStore::new(object(json!({"prefix": "!", "language": "en-US"})));

    store.tracker().set("prefix", json!("?"));

    let merged = store.merged();
    assert_eq!(merged.get("prefix"), Some(&json!("?")));
    assert_eq!(merged.get("language"), Some(&json!("en-US")));
}

/// Tests that an edit to a key absent from the base also round-trips.
///
/// Expected: merged view contains the new key
#[test]
fn pending_edit_on_missing_key_round_trips() {
    let mut store = SettingsStore::new(object(json!({})));

    store.tracker().set("ignoreChannels", json!(["111"]));

    assert_eq!(
        store.merged().get("ignoreChannels"),
        Some(&json!(["111"]))
    );
}

/// Tests that a Clear tombstone removes the field from the merged view.
///
/// Expected: cleared key is absent, untouched keys remain
#[test]
fn clear_tombstone_removes_field() {
    let mut store = SettingsStore::new(object(json!({"logChannel": "42", "prefix": "!"})));

    store.tracker().clear("logChannel");

    let merged = store.merged();
    assert!(!merged.contains_key("logChannel"));
    assert_eq!(merged.get("prefix"), Some(&json!("!")));
}

/// Tests that the merged view applies array-replace semantics through the
/// overlay.
///
/// Expected: pending array wholly replaces the base array
#[test]
fn merged_view_replaces_arrays() {
    let mut store = SettingsStore::new(object(json!({"adminRoles": ["1", "2"]})));

    store.tracker().set("adminRoles", json!(["3"]));

    assert_eq!(store.merged().get("adminRoles"), Some(&json!(["3"])));
}

/// Tests that the merged view is computed, not cached: base stays pristine
/// until commit.
///
/// Expected: base still holds the fetched value while merged differs
#[test]
fn base_is_untouched_by_pending_edits() {
    let mut store = SettingsStore::new(object(json!({"prefix": "!"})));

    store.tracker().set("prefix", json!("?"));

    assert_eq!(store.base().get("prefix"), Some(&json!("!")));
    assert_eq!(store.merged().get("prefix"), Some(&json!("?")));
}

/// Tests that committing canonical settings replaces the base and drops the
/// overlay.
///
/// Expected: has_changes is false and merged equals the canonical map
#[test]
fn commit_resets_overlay() {
    let mut store = SettingsStore::new(object(json!({"prefix": "!"})));
    store.tracker().set("prefix", json!("?"));

    let canonical = object(json!({"prefix": "?"}));
    store.commit(canonical.clone());

    assert!(!store.has_changes());
    assert_eq!(store.merged(), canonical);
}

/// Tests the submit encoding: Set edits carry their value and Clear
/// tombstones encode as JSON null.
///
/// Expected: ordered pairs with null for the cleared field
#[test]
fn write_pairs_encode_tombstones_as_null() {
    let mut store = SettingsStore::new(object(json!({})));
    store.tracker().set("prefix", json!("?"));
    store.tracker().clear("logChannel");

    let pairs = store.to_write_pairs();

    assert!(pairs.contains(&("prefix".to_string(), json!("?"))));
    assert!(pairs.contains(&("logChannel".to_string(), Value::Null)));
    assert_eq!(pairs.len(), 2);
}

/// Tests that a store with no pending edits produces no write pairs.
///
/// Expected: empty pair list
#[test]
fn write_pairs_empty_without_changes() {
    let store = SettingsStore::new(object(json!({"prefix": "!"})));

    assert!(store.to_write_pairs().is_empty());
}
