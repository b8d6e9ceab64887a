use poise::CreateReply;
use serenity::model::guild::Role;
use serenity::model::mention::Mentionable;

use crate::commands::Context;
use crate::db::BindingChange;
use crate::error::Result;
use crate::tickets::views;

/// Setup the ticket system
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Tickets"
)]
pub async fn setup_tickets(ctx: Context<'_>) -> Result<()> {
    ctx.send(
        CreateReply::default()
            .embed(views::ticket_panel_embed())
            .components(views::ticket_panel_buttons()),
    )
    .await?;

    Ok(())
}

/// Setup the role for the ticket system
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Tickets"
)]
pub async fn setup_role(ctx: Context<'_>, role: Role) -> Result<()> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let reply = match ctx.data().roles.set(guild_id, role.id).await? {
        BindingChange::Created => format!("Set mod role to {}", role.mention()),
        BindingChange::Updated => format!("Updated mod role to {}", role.mention()),
    };
    ctx.say(reply).await?;

    Ok(())
}
