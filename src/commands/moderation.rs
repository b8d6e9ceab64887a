use serenity::builder::GetMessages;
use serenity::model::guild::Member;
use serenity::model::id::MessageId;
use serenity::model::user::User;

use crate::commands::Context;
use crate::error::Result;

/// Kick a user from the guild
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "KICK_MEMBERS",
    category = "Moderation"
)]
pub async fn kick(ctx: Context<'_>, member: Member, #[rest] reason: Option<String>) -> Result<()> {
    member
        .kick_with_reason(ctx.http(), reason.as_deref().unwrap_or(""))
        .await?;
    ctx.say(format!("get out of here {}", member.user.name))
        .await?;

    Ok(())
}

/// Ban a user from the guild
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    category = "Moderation"
)]
pub async fn ban(ctx: Context<'_>, member: Member, #[rest] reason: Option<String>) -> Result<()> {
    member
        .ban_with_reason(ctx.http(), 0, reason.as_deref().unwrap_or(""))
        .await?;
    ctx.say(format!("smoking that {} pack lmao", member.user.name))
        .await?;

    Ok(())
}

/// Unban a user from the guild
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "BAN_MEMBERS",
    category = "Moderation"
)]
pub async fn unban(ctx: Context<'_>, user: User, #[rest] reason: Option<String>) -> Result<()> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    ctx.http()
        .remove_ban(guild_id, user.id, reason.as_deref())
        .await?;
    ctx.say(format!("{} got a second chance", user.name)).await?;

    Ok(())
}

/// Clear messages from the channel
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    category = "Moderation"
)]
pub async fn clear(ctx: Context<'_>, amount: u8) -> Result<()> {
    let messages = ctx
        .channel_id()
        .messages(ctx.http(), GetMessages::new().limit(amount))
        .await?;
    let message_ids: Vec<MessageId> = messages.iter().map(|message| message.id).collect();
    ctx.channel_id()
        .delete_messages(ctx.http(), message_ids)
        .await?;
    ctx.say(format!("cleared {} messages", amount)).await?;

    Ok(())
}
