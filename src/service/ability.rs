//! The guild ability check: may this member manage this guild?

use serde_json::{Map, Value};
use serenity::all::Permissions;

use crate::{
    model::discord::{GuildProfile, MemberProfile},
    settings::schema::ADMIN_ROLES_KEY,
};

/// One authorization strategy in the manage-ability chain.
///
/// Strategies are pure predicates over the resolved guild and member;
/// whatever settings context a strategy needs is baked in at construction
/// time so evaluation never touches storage.
pub trait ManageCheck: Send + Sync {
    /// True iff this strategy alone grants manage access.
    fn allows(&self, guild: &GuildProfile, member: &MemberProfile) -> bool;
}

/// Grants the guild owner.
pub struct OwnerCheck;

impl ManageCheck for OwnerCheck {
    fn allows(&self, guild: &GuildProfile, member: &MemberProfile) -> bool {
        member.user_id == guild.owner_id
    }
}

/// Grants members holding one of the guild's configured admin roles.
pub struct AdminRoleCheck {
    admin_roles: Vec<u64>,
}

impl AdminRoleCheck {
    /// Creates the check over the configured admin role IDs.
    pub fn new(admin_roles: Vec<u64>) -> Self {
        Self { admin_roles }
    }
}

impl ManageCheck for AdminRoleCheck {
    fn allows(&self, _guild: &GuildProfile, member: &MemberProfile) -> bool {
        member
            .role_ids
            .iter()
            .any(|role_id| self.admin_roles.contains(role_id))
    }
}

/// Grants members whose resolved permissions carry Manage Guild.
///
/// Administrator implies every permission on Discord, so it is accepted as
/// well.
pub struct ManageGuildCheck;

impl ManageCheck for ManageGuildCheck {
    fn allows(&self, guild: &GuildProfile, member: &MemberProfile) -> bool {
        guild
            .member_permissions(member)
            .intersects(Permissions::MANAGE_GUILD | Permissions::ADMINISTRATOR)
    }
}

/// Composed manage-ability check: strategies evaluated in order, first
/// grant wins.
pub struct Authorizer {
    checks: Vec<Box<dyn ManageCheck>>,
}

impl Authorizer {
    /// Builds the standard chain from a guild's stored settings.
    ///
    /// The owner is always allowed. When the `adminRoles` setting is
    /// non-empty it is the sole further grant (no permission-bit fallback);
    /// when it is empty or absent, the Manage Guild permission bit decides.
    pub fn from_settings(settings: &Map<String, Value>) -> Self {
        let admin_roles = admin_role_ids(settings);

        let mut checks: Vec<Box<dyn ManageCheck>> = vec![Box::new(OwnerCheck)];
        if admin_roles.is_empty() {
            checks.push(Box::new(ManageGuildCheck));
        } else {
            checks.push(Box::new(AdminRoleCheck::new(admin_roles)));
        }

        Self { checks }
    }

    /// True iff any strategy in the chain grants manage access.
    pub fn can_manage(&self, guild: &GuildProfile, member: &MemberProfile) -> bool {
        self.checks
            .iter()
            .any(|check| check.allows(guild, member))
    }
}

/// Extracts the admin role ID list from stored settings.
///
/// Role IDs are stored as strings (Discord snowflakes exceed the safe JSON
/// integer range), but numeric entries are tolerated.
fn admin_role_ids(settings: &Map<String, Value>) -> Vec<u64> {
    settings
        .get(ADMIN_ROLES_KEY)
        .and_then(Value::as_array)
        .map(|roles| roles.iter().filter_map(role_id_of).collect())
        .unwrap_or_default()
}

fn role_id_of(value: &Value) -> Option<u64> {
    match value {
        Value::String(id) => id.parse().ok(),
        Value::Number(id) => id.as_u64(),
        _ => None,
    }
}
