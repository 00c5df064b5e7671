use std::collections::HashMap;

use crate::{
    error::AppError,
    model::discord::{GuildProfile, MemberProfile, RoleProfile},
    service::discord::GuildDirectory,
};


/// In-memory guild directory standing in for the Discord REST API.
///
/// Serves one fixed guild plus a set of seeded members. Lookups for
/// unseeded members panic, since every test seeds the members it uses.
pub struct StubDirectory {
    guild: GuildProfile,
    members: HashMap<u64, MemberProfile>,
}

impl StubDirectory {
    pub fn new(guild: GuildProfile) -> Self {
        Self {
            guild,
            members: HashMap::new(),
        }
    }

    pub fn with_member(mut self, member: MemberProfile) -> Self {
        self.members.insert(member.user_id, member);
        self
    }
}

#[serenity::async_trait]
impl GuildDirectory for StubDirectory {
    async fn guild(&self, _guild_id: u64) -> Result<GuildProfile, AppError> {
        Ok(self.guild.clone())
    }

    async fn member(&self, _guild_id: u64, user_id: u64) -> Result<MemberProfile, AppError> {
        Ok(self
            .members
            .get(&user_id)
            .unwrap_or_else(|| panic!("member {user_id} was not seeded"))
            .clone())
    }
}

/// A guild owned by user 100 whose roles are @everyone (no permissions)
/// plus the given `(role_id, permissions)` pairs.
pub fn guild_with_roles(roles: &[(u64, u64)]) -> GuildProfile {
    let mut all_roles = vec![RoleProfile {
        role_id: 500,
        permissions: 0,
    }];
    all_roles.extend(roles.iter().map(|(role_id, permissions)| RoleProfile {
        role_id: *role_id,
        permissions: *permissions,
    }));

    GuildProfile {
        guild_id: 500,
        owner_id: 100,
        roles: all_roles,
    }
}

pub fn member(user_id: u64, role_ids: &[u64]) -> MemberProfile {
    MemberProfile {
        user_id,
        role_ids: role_ids.to_vec(),
    }
}
