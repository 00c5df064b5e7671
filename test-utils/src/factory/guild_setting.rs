//! Guild setting factory for creating stored settings rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test guild settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_setting::GuildSettingFactory;
///
/// let setting = GuildSettingFactory::new(&db)
///     .guild_id("500")
///     .key("prefix")
///     .value(serde_json::json!("?"))
///     .build()
///     .await?;
/// ```
pub struct GuildSettingFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    key: String,
    value: Value,
}

impl<'a> GuildSettingFactory<'a> {
    /// Creates a new GuildSettingFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: a unique numeric ID
    /// - key: `"prefix"`
    /// - value: `"!"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            key: "prefix".to_string(),
            value: Value::String("!".to_string()),
        }
    }

    /// Sets the guild ID for the settings row.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the settings key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the stored JSON value.
    pub fn value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::guild_setting::Model, DbErr> {
        let setting = entity::guild_setting::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            key: ActiveValue::Set(self.key),
            value: ActiveValue::Set(self.value),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        setting.insert(self.db).await
    }
}

/// Creates a guild settings row with default values for the given guild.
///
/// # Returns
/// - `Ok(Model)` - The inserted row
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_setting(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_setting::Model, DbErr> {
    GuildSettingFactory::new(db).guild_id(guild_id).build().await
}
