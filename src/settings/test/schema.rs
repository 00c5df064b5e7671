use super::*;
use crate::settings::schema::SettingsSchema;

/// Tests that serializing empty stored settings yields the full defaults.
///
/// Expected: every known key present with its default value
#[test]
fn serialize_empty_yields_defaults() {
    let schema = SettingsSchema::new();

    let serialized = schema.serialize(&object(json!({})));

    assert_eq!(serialized, schema.defaults());
    assert_eq!(serialized.get("prefix"), Some(&json!("!")));
    assert_eq!(serialized.get("adminRoles"), Some(&json!([])));
}

/// Tests that stored values override defaults while missing keys fall back.
///
/// Expected: stored prefix wins, untouched keys keep defaults
#[test]
fn serialize_layers_stored_over_defaults() {
    let schema = SettingsSchema::new();
    let stored = object(json!({"prefix": "?"}));

    let serialized = schema.serialize(&stored);

    assert_eq!(serialized.get("prefix"), Some(&json!("?")));
    assert_eq!(serialized.get("language"), Some(&json!("en-US")));
}

/// Tests that stored arrays replace default arrays wholesale.
///
/// Expected: serialized view holds exactly the stored list
#[test]
fn serialize_replaces_default_arrays() {
    let schema = SettingsSchema::new();
    let stored = object(json!({"ignoreChannels": ["111"]}));

    let serialized = schema.serialize(&stored);

    assert_eq!(serialized.get("ignoreChannels"), Some(&json!(["111"])));
}

/// Tests that a partially-stored nested object serializes with sibling
/// defaults filled in.
///
/// Expected: antiInvite from storage, antiSpam/muteRole from defaults
#[test]
fn serialize_fills_nested_defaults() {
    let schema = SettingsSchema::new();
    let stored = object(json!({"moderation": {"antiInvite": true}}));

    let serialized = schema.serialize(&stored);

    assert_eq!(
        serialized.get("moderation"),
        Some(&json!({"antiInvite": true, "antiSpam": false, "muteRole": null}))
    );
}

/// Tests known-key membership checks.
///
/// Expected: schema keys accepted, arbitrary keys rejected
#[test]
fn contains_distinguishes_known_keys() {
    let schema = SettingsSchema::new();

    assert!(schema.contains("prefix"));
    assert!(schema.contains("adminRoles"));
    assert!(!schema.contains("notASetting"));
}

/// Tests that the first unknown key in a write batch is reported.
///
/// Expected: Some("bogus") for a mixed batch, None for an all-known batch
#[test]
fn find_unknown_key_scans_pairs() {
    let schema = SettingsSchema::new();
    let mixed = vec![
        ("prefix".to_string(), json!("?")),
        ("bogus".to_string(), json!(1)),
    ];
    let known = vec![("prefix".to_string(), json!("?"))];

    assert_eq!(schema.find_unknown_key(&mixed), Some("bogus"));
    assert_eq!(schema.find_unknown_key(&known), None);
}
