//! Test factory for creating Serenity PartialGuild objects.

use serenity::all::PartialGuild;

/// Creates a test Serenity PartialGuild with the given owner and roles.
///
/// Creates a PartialGuild by deserializing JSON with the provided values,
/// the shape Discord's Get Guild endpoint returns. Each `(role_id,
/// permissions)` pair becomes a guild role; pass the guild's own ID as a
/// role ID to model the @everyone role. Permission bits are encoded as
/// strings, matching the wire format.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `owner_id` - Discord user ID of the guild owner
/// - `roles` - `(role_id, permission_bits)` pairs for every guild role
///
/// # Returns
/// - `PartialGuild` - A valid Serenity PartialGuild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
pub fn create_test_partial_guild(guild_id: u64, owner_id: u64, roles: &[(u64, u64)]) -> PartialGuild {
    let role_objects: Vec<serde_json::Value> = roles
        .iter()
        .map(|(role_id, permissions)| {
            serde_json::json!({
                "id": role_id.to_string(),
                "guild_id": guild_id.to_string(),
                "name": format!("Role {}", role_id),
                "color": 0,
                "hoist": false,
                "icon": null,
                "unicode_emoji": null,
                "position": 0,
                "permissions": permissions.to_string(),
                "managed": false,
                "mentionable": false,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": "Test Guild",
        "icon": null,
        "icon_hash": null,
        "splash": null,
        "discovery_splash": null,
        "owner": false,
        "owner_id": owner_id.to_string(),
        "permissions": "0",
        "afk_channel_id": null,
        "afk_timeout": 300,
        "widget_enabled": false,
        "widget_channel_id": null,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": role_objects,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "application_id": null,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "rules_channel_id": null,
        "max_presences": 25000,
        "max_members": 100000,
        "vanity_url_code": null,
        "description": null,
        "banner": null,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "preferred_locale": "en-US",
        "public_updates_channel_id": null,
        "max_video_channel_users": 25,
        "approximate_member_count": 100,
        "approximate_presence_count": 10,
        "welcome_screen": null,
        "nsfw_level": 0,
        "premium_progress_bar_enabled": false,
    }))
    .expect("Failed to create test partial guild - invalid JSON structure")
}
