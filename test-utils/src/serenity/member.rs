//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity Member with the given roles.
///
/// Creates a Member by deserializing JSON with the provided values, the
/// shape Discord's Get Guild Member endpoint returns (with `guild_id`
/// injected the way Serenity's HTTP client does).
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake) the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `role_ids` - IDs of the roles the member holds (excluding @everyone)
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, role_ids: &[u64]) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|role_id| role_id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": format!("user_{}", user_id),
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
