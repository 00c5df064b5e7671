use serenity::all::{Member, PartialGuild, Permissions};

/// A guild role as the ability check sees it.
///
/// Only the ID and permission bits survive the boundary; names, colors, and
/// positions are irrelevant to authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleProfile {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Raw permission bits carried by the role.
    pub permissions: u64,
}

/// A Discord guild reduced to what authorization needs.
///
/// This param model decouples the service layer from Serenity's guild types;
/// the conversion happens once at the Discord collaborator boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildProfile {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// The guild owner's user ID.
    pub owner_id: u64,
    /// Every role defined in the guild, including @everyone.
    pub roles: Vec<RoleProfile>,
}

/// A guild member reduced to what authorization needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProfile {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// IDs of the roles the member holds (excluding @everyone).
    pub role_ids: Vec<u64>,
}

impl GuildProfile {
    /// Converts a Serenity guild at the REST collaborator boundary.
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id.get(),
            owner_id: guild.owner_id.get(),
            roles: guild
                .roles
                .iter()
                .map(|(role_id, role)| RoleProfile {
                    role_id: role_id.get(),
                    permissions: role.permissions.bits(),
                })
                .collect(),
        }
    }

    /// Resolves a member's effective permission set in this guild.
    ///
    /// Discord semantics: the @everyone role shares the guild's ID and
    /// applies to every member; the member's own roles OR their bits on top.
    pub fn member_permissions(&self, member: &MemberProfile) -> Permissions {
        let mut bits = 0u64;

        for role in &self.roles {
            let is_everyone = role.role_id == self.guild_id;
            if is_everyone || member.role_ids.contains(&role.role_id) {
                bits |= role.permissions;
            }
        }

        Permissions::from_bits_truncate(bits)
    }
}

impl MemberProfile {
    /// Converts a Serenity member at the REST collaborator boundary.
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            role_ids: member.roles.iter().map(|role_id| role_id.get()).collect(),
        }
    }
}
