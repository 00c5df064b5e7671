use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Request body for `PATCH /api/guilds/{guild_id}/settings`.
///
/// The wire format is an ordered list of `[key, value]` pairs rather than an
/// object, preserving the order in which fields are applied inside the write
/// transaction. A JSON `null` value clears the field.
#[derive(Deserialize, ToSchema)]
pub struct UpdateSettingsDto {
    /// Ordered `[key, value]` pairs to apply atomically.
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<(String, Value)>,
}

/// Query parameters for `GET /api/guilds/{guild_id}/settings`.
#[derive(Deserialize)]
pub struct GetSettingsQuery {
    /// Presence-style flag: serialize the response (fill schema defaults)
    /// unless the literal value `false` is supplied.
    #[serde(default, rename = "shouldSerialize")]
    pub should_serialize: Option<String>,
    /// Evaluate the ability check on behalf of this user instead of the
    /// session user.
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

impl GetSettingsQuery {
    /// Whether the serialized (defaults-filled) view was requested.
    ///
    /// `?shouldSerialize` and `?shouldSerialize=true` both count; only the
    /// literal `false` opts out.
    pub fn wants_serialized(&self) -> bool {
        match self.should_serialize.as_deref() {
            None => false,
            Some("false") => false,
            Some(_) => true,
        }
    }
}
