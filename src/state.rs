use serenity::model::id::UserId;

use crate::db::RoleRegistry;

/// Process-lifetime context handed to every command and interaction handler.
#[derive(Debug)]
pub struct BotContext {
    pub roles: RoleRegistry,
    pub bot_user_id: UserId,
}

impl BotContext {
    pub fn new(roles: RoleRegistry, bot_user_id: UserId) -> Self {
        BotContext { roles, bot_user_id }
    }
}
