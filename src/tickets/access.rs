use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::{GuildId, RoleId, UserId};
use serenity::model::permissions::Permissions;

/// Who a ticket capability applies to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TicketActor {
    /// The guild-wide `@everyone` role. Its ID equals the guild ID.
    Everyone(RoleId),
    /// The moderator role bound through `setup_role`.
    BoundRole(RoleId),
    Member(UserId),
}

/// A single per-channel capability: whether the actor may read the ticket.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TicketAccess {
    pub actor: TicketActor,
    pub can_read: bool,
}

impl TicketAccess {
    pub fn allow(actor: TicketActor) -> Self {
        TicketAccess {
            actor,
            can_read: true,
        }
    }

    pub fn deny(actor: TicketActor) -> Self {
        TicketAccess {
            actor,
            can_read: false,
        }
    }
}

impl From<TicketAccess> for PermissionOverwrite {
    fn from(access: TicketAccess) -> Self {
        let (allow, deny) = match access.can_read {
            true => (Permissions::VIEW_CHANNEL, Permissions::empty()),
            false => (Permissions::empty(), Permissions::VIEW_CHANNEL),
        };
        let kind = match access.actor {
            TicketActor::Everyone(role_id) | TicketActor::BoundRole(role_id) => {
                PermissionOverwriteType::Role(role_id)
            }
            TicketActor::Member(user_id) => PermissionOverwriteType::Member(user_id),
        };

        PermissionOverwrite { allow, deny, kind }
    }
}

/// The ordered access list for a fresh ticket channel: `@everyone` is denied,
/// the bot, the bound role (when one exists) and the opener can read.
pub fn ticket_access_list(
    guild_id: GuildId,
    bot_user_id: UserId,
    opened_by: UserId,
    bound_role: Option<RoleId>,
) -> Vec<TicketAccess> {
    let everyone = RoleId::new(guild_id.get());

    let mut access = vec![
        TicketAccess::deny(TicketActor::Everyone(everyone)),
        TicketAccess::allow(TicketActor::Member(bot_user_id)),
    ];
    if let Some(role_id) = bound_role {
        access.push(TicketAccess::allow(TicketActor::BoundRole(role_id)));
    }
    access.push(TicketAccess::allow(TicketActor::Member(opened_by)));

    access
}

/// The overwrite flipped by the Add User / Remove User modals.
pub fn member_read_overwrite(user_id: UserId, can_read: bool) -> PermissionOverwrite {
    let access = match can_read {
        true => TicketAccess::allow(TicketActor::Member(user_id)),
        false => TicketAccess::deny(TicketActor::Member(user_id)),
    };

    PermissionOverwrite::from(access)
}

#[cfg(test)]
mod tests {
    use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
    use serenity::model::id::{GuildId, RoleId, UserId};
    use serenity::model::permissions::Permissions;

    use crate::tickets::access::{
        TicketAccess, TicketActor, member_read_overwrite, ticket_access_list,
    };

    const GUILD: GuildId = GuildId::new(100);
    const BOT: UserId = UserId::new(1);
    const OPENER: UserId = UserId::new(2);
    const MOD_ROLE: RoleId = RoleId::new(300);

    fn readers(access: &[TicketAccess]) -> Vec<TicketActor> {
        access
            .iter()
            .filter(|entry| entry.can_read)
            .map(|entry| entry.actor)
            .collect()
    }

    #[test]
    fn test_access_list_with_a_bound_role() {
        let access = ticket_access_list(GUILD, BOT, OPENER, Some(MOD_ROLE));

        assert_eq!(
            readers(&access),
            vec![
                TicketActor::Member(BOT),
                TicketActor::BoundRole(MOD_ROLE),
                TicketActor::Member(OPENER),
            ]
        );
        assert_eq!(
            access[0],
            TicketAccess::deny(TicketActor::Everyone(RoleId::new(100)))
        );
    }

    #[test]
    fn test_access_list_without_a_bound_role() {
        let access = ticket_access_list(GUILD, BOT, OPENER, None);

        assert_eq!(
            readers(&access),
            vec![TicketActor::Member(BOT), TicketActor::Member(OPENER)]
        );
        assert_eq!(
            access[0],
            TicketAccess::deny(TicketActor::Everyone(RoleId::new(100)))
        );
    }

    #[test]
    fn test_everyone_is_never_granted_read_access() {
        for bound_role in [None, Some(MOD_ROLE)] {
            let access = ticket_access_list(GUILD, BOT, OPENER, bound_role);
            assert!(
                readers(&access)
                    .iter()
                    .all(|actor| !matches!(actor, TicketActor::Everyone(_)))
            );
        }
    }

    #[test]
    fn test_access_converts_into_a_permission_overwrite() {
        let overwrite = PermissionOverwrite::from(TicketAccess::deny(TicketActor::Everyone(
            RoleId::new(100),
        )));
        assert_eq!(overwrite.allow, Permissions::empty());
        assert_eq!(overwrite.deny, Permissions::VIEW_CHANNEL);
        assert_eq!(overwrite.kind, PermissionOverwriteType::Role(RoleId::new(100)));

        let overwrite = member_read_overwrite(OPENER, true);
        assert_eq!(overwrite.allow, Permissions::VIEW_CHANNEL);
        assert_eq!(overwrite.deny, Permissions::empty());
        assert_eq!(overwrite.kind, PermissionOverwriteType::Member(OPENER));
    }
}
