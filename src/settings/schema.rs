//! The fixed settings schema: known keys and their defaults.

use serde_json::{json, Map, Value};

use crate::settings::merge::merge;

/// Settings key holding the role IDs allowed to manage the guild.
pub const ADMIN_ROLES_KEY: &str = "adminRoles";

/// The fixed set of settings fields a guild can carry.
///
/// Writes against keys outside this set are rejected at validation time, so
/// the persisted rows for a guild always form a subset of the schema.
const KNOWN_KEYS: &[&str] = &[
    "prefix",
    "language",
    ADMIN_ROLES_KEY,
    "moderatorRoles",
    "ignoreChannels",
    "logChannel",
    "announcementChannel",
    "moderation",
    "welcome",
];

/// The guild settings schema.
///
/// Owns the default value for every known key and produces the "serialized"
/// view of a guild's settings: stored values layered over the defaults so
/// every known key is present in the output.
pub struct SettingsSchema;

impl SettingsSchema {
    /// Creates the schema.
    pub fn new() -> Self {
        Self
    }

    /// True iff `key` is a known settings field.
    pub fn contains(&self, key: &str) -> bool {
        KNOWN_KEYS.contains(&key)
    }

    /// Returns the first key in `pairs` that is not part of the schema.
    pub fn find_unknown_key<'a>(&self, pairs: &'a [(String, Value)]) -> Option<&'a str> {
        pairs
            .iter()
            .map(|(key, _)| key.as_str())
            .find(|key| !self.contains(key))
    }

    /// The default value for every known key.
    ///
    /// Array-typed fields default to empty lists, channel references to
    /// `null`, and the grouped toggles to fully-disabled nested objects.
    pub fn defaults(&self) -> Map<String, Value> {
        let Value::Object(defaults) = json!({
            "prefix": "!",
            "language": "en-US",
            "adminRoles": [],
            "moderatorRoles": [],
            "ignoreChannels": [],
            "logChannel": null,
            "announcementChannel": null,
            "moderation": {
                "antiInvite": false,
                "antiSpam": false,
                "muteRole": null,
            },
            "welcome": {
                "enabled": false,
                "channel": null,
                "message": "Welcome {user}!",
            },
        }) else {
            unreachable!("schema defaults literal is an object");
        };

        defaults
    }

    /// Produces the serialized view: stored settings deep-merged over the
    /// defaults.
    ///
    /// Fields the guild never wrote come back as their defaults; stored
    /// arrays replace default arrays wholesale; stored nested objects merge
    /// field-by-field into the default object so partial writes (say, only
    /// `moderation.antiInvite`) still serialize with the sibling defaults.
    pub fn serialize(&self, stored: &Map<String, Value>) -> Map<String, Value> {
        merge(&self.defaults(), Some(stored))
    }
}

impl Default for SettingsSchema {
    fn default() -> Self {
        Self::new()
    }
}
