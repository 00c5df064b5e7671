//! Guild settings service: read and patch the per-guild configuration.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::{
    data::settings::GuildSettingsRepository,
    error::{auth::AuthError, AppError},
    service::{ability::Authorizer, discord::GuildDirectory},
    settings::{schema::SettingsSchema, store::SettingsStore},
};

/// Service for reading and updating a guild's settings.
///
/// Every operation authorizes the acting user against the guild before
/// touching settings: guild and member are resolved through the directory,
/// the ability check runs over the stored settings, and only then does the
/// request proceed.
pub struct GuildSettingsService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn GuildDirectory,
    schema: SettingsSchema,
}

impl<'a> GuildSettingsService<'a> {
    /// Creates the service over a database handle and a guild directory.
    pub fn new(db: &'a DatabaseConnection, directory: &'a dyn GuildDirectory) -> Self {
        Self {
            db,
            directory,
            schema: SettingsSchema::new(),
        }
    }

    /// Fetches a guild's settings on behalf of `acting_user_id`.
    ///
    /// With `serialized` set the stored fields are layered over the schema
    /// defaults so every known key appears; otherwise only the fields the
    /// guild actually wrote come back.
    ///
    /// # Errors
    /// Returns `AppError::AuthErr` when the acting user may not manage the
    /// guild, `AppError::DiscordErr` when guild or member lookup fails, and
    /// `AppError::DbErr` on storage failure.
    pub async fn get(
        &self,
        guild_id: u64,
        acting_user_id: u64,
        serialized: bool,
    ) -> Result<Map<String, Value>, AppError> {
        let stored = self.authorized_settings(guild_id, acting_user_id).await?;

        if serialized {
            Ok(self.schema.serialize(&stored))
        } else {
            Ok(stored)
        }
    }

    /// Applies a batch of `(key, value)` edits to a guild's settings.
    ///
    /// Validation runs before authorization so malformed requests fail fast:
    /// the batch must be non-empty and every key must belong to the schema.
    /// A JSON `null` value clears the field back to its default. The whole
    /// batch commits in one transaction, and the response is the serialized
    /// canonical settings re-read inside that transaction.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` for an empty batch or an unknown key,
    /// plus the same auth, Discord, and storage errors as [`Self::get`].
    pub async fn update(
        &self,
        guild_id: u64,
        acting_user_id: u64,
        pairs: Vec<(String, Value)>,
    ) -> Result<Map<String, Value>, AppError> {
        if pairs.is_empty() {
            return Err(AppError::BadRequest(
                "data must contain at least one [key, value] pair".to_string(),
            ));
        }
        if let Some(key) = self.schema.find_unknown_key(&pairs) {
            return Err(AppError::BadRequest(format!(
                "unknown settings key: {key}"
            )));
        }

        let stored = self.authorized_settings(guild_id, acting_user_id).await?;

        let mut store = SettingsStore::new(stored);
        for (key, value) in pairs {
            store.tracker().set(key, value);
        }

        let repo = GuildSettingsRepository::new(self.db);
        let canonical = repo.write(guild_id, &store.to_write_pairs()).await?;
        store.commit(canonical);

        Ok(self.schema.serialize(store.base()))
    }

    /// Resolves the guild, runs the ability check for the acting user, and
    /// returns the stored settings the check was evaluated against.
    async fn authorized_settings(
        &self,
        guild_id: u64,
        acting_user_id: u64,
    ) -> Result<Map<String, Value>, AppError> {
        let guild = self.directory.guild(guild_id).await?;
        let member = self.directory.member(guild_id, acting_user_id).await?;

        let repo = GuildSettingsRepository::new(self.db);
        let stored = repo.get(guild_id).await?;

        let authorizer = Authorizer::from_settings(&stored);
        if !authorizer.can_manage(&guild, &member) {
            return Err(AuthError::AccessDenied {
                user_id: acting_user_id,
                guild_id,
            }
            .into());
        }

        Ok(stored)
    }
}
