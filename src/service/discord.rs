//! The Discord REST collaborator behind a trait seam.

use std::sync::Arc;

use serenity::all::{GuildId, UserId};
use serenity::http::Http;

use crate::{
    error::AppError,
    model::discord::{GuildProfile, MemberProfile},
};

/// Supplies guild and member data for authorization decisions.
///
/// The production implementation calls Discord's REST API; tests substitute
/// an in-memory directory. Lookup failures surface as `AppError::DiscordErr`
/// and map to 500 at the HTTP boundary.
#[serenity::async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Resolves a guild with its owner and role set.
    async fn guild(&self, guild_id: u64) -> Result<GuildProfile, AppError>;

    /// Resolves a guild member with their role ID list.
    async fn member(&self, guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError>;
}

/// Discord REST-backed guild directory.
pub struct DiscordDirectory {
    http: Arc<Http>,
}

impl DiscordDirectory {
    /// Creates a directory over a shared Serenity HTTP client.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl GuildDirectory for DiscordDirectory {
    async fn guild(&self, guild_id: u64) -> Result<GuildProfile, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;
        Ok(GuildProfile::from_partial_guild(&guild))
    }

    async fn member(&self, guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;
        Ok(MemberProfile::from_member(&member))
    }
}
