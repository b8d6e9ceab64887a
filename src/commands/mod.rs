pub mod giveaway;
pub mod help;
pub mod moderation;
pub mod payments;
pub mod tickets;

use poise::Context as PoiseContext;

use crate::error::Error;
use crate::state::BotContext;

// Generic context available across Poise commands
pub type Context<'a> = PoiseContext<'a, BotContext, Error>;

pub fn get_commands_list() -> Vec<poise::Command<BotContext, Error>> {
    vec![
        help::help(),
        tickets::setup_tickets(),
        tickets::setup_role(),
        moderation::kick(),
        moderation::ban(),
        moderation::unban(),
        moderation::clear(),
        giveaway::gstart(),
        giveaway::greroll(),
        giveaway::gend(),
        payments::store(),
        payments::cashapp(),
        payments::crypto(),
    ]
}
