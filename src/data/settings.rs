//! Guild settings persistence.
//!
//! Settings are stored one row per (guild, key) with a JSON value column.
//! Reads fold the rows into a settings map; writes apply an ordered batch of
//! pairs inside a single database transaction so the whole batch commits or
//! fails together.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, TransactionError, TransactionTrait,
};
use serde_json::{Map, Value};

/// Repository providing database operations for per-guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the stored settings map for a guild.
    ///
    /// A guild with no stored rows yields an empty map, which the schema
    /// layer serializes into pure defaults.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID (u64)
    ///
    /// # Returns
    /// - `Ok(Map)` - Stored fields keyed by settings key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64) -> Result<Map<String, Value>, DbErr> {
        let rows = entity::prelude::GuildSetting::find()
            .filter(entity::guild_setting::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }

    /// Applies a write transaction: every pair upserted or deleted as one
    /// atomic unit, returning the new canonical settings.
    ///
    /// A JSON `null` value deletes the field's row (explicit clear); any
    /// other value upserts it. The canonical map is re-read inside the same
    /// transaction so the caller sees exactly what was committed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID (u64)
    /// - `pairs` - Ordered `(key, value)` pairs to apply
    ///
    /// # Returns
    /// - `Ok(Map)` - Canonical settings after the commit
    /// - `Err(DbErr)` - Database error; the whole batch is rolled back
    pub async fn write(
        &self,
        guild_id: u64,
        pairs: &[(String, Value)],
    ) -> Result<Map<String, Value>, DbErr> {
        let guild_key = guild_id.to_string();
        let pairs = pairs.to_vec();

        let result = self
            .db
            .transaction::<_, Map<String, Value>, DbErr>(move |txn| {
                Box::pin(async move {
                    for (key, value) in pairs {
                        apply_pair(txn, &guild_key, key, value).await?;
                    }

                    let rows = entity::prelude::GuildSetting::find()
                        .filter(entity::guild_setting::Column::GuildId.eq(guild_key))
                        .all(txn)
                        .await?;

                    Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
                })
            })
            .await;

        result.map_err(|err| match err {
            TransactionError::Connection(err) => err,
            TransactionError::Transaction(err) => err,
        })
    }
}

/// Applies one (key, value) pair inside an open transaction.
async fn apply_pair(
    txn: &DatabaseTransaction,
    guild_key: &str,
    key: String,
    value: Value,
) -> Result<(), DbErr> {
    if value.is_null() {
        entity::prelude::GuildSetting::delete_many()
            .filter(entity::guild_setting::Column::GuildId.eq(guild_key))
            .filter(entity::guild_setting::Column::Key.eq(key))
            .exec(txn)
            .await?;
        return Ok(());
    }

    entity::prelude::GuildSetting::insert(entity::guild_setting::ActiveModel {
        guild_id: ActiveValue::Set(guild_key.to_string()),
        key: ActiveValue::Set(key),
        value: ActiveValue::Set(value),
        updated_at: ActiveValue::Set(Utc::now()),
    })
    .on_conflict(
        OnConflict::columns([
            entity::guild_setting::Column::GuildId,
            entity::guild_setting::Column::Key,
        ])
        .update_columns([
            entity::guild_setting::Column::Value,
            entity::guild_setting::Column::UpdatedAt,
        ])
        .to_owned(),
    )
    .exec(txn)
    .await?;

    Ok(())
}
