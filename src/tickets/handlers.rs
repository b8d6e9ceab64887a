use serenity::builder::{
    CreateAttachment, CreateChannel, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditInteractionResponse, GetMessages,
};
use serenity::client::Context;
use serenity::http::Http;
use serenity::model::application::{
    ActionRowComponent, ComponentInteraction, ModalInteraction,
};
use serenity::model::channel::{ChannelType, GuildChannel, Message, PermissionOverwrite};
use serenity::model::id::{ChannelId, MessageId, UserId};
use serenity::model::mention::Mentionable;
use tracing::info;

use crate::error::{Error, Result};
use crate::state::BotContext;
use crate::tickets::{access, transcript, views};

const INVALID_USER: &str = "Invalid user ID! Make sure the user is in the server.";

pub async fn dispatch_component(
    ctx: &Context,
    interaction: &ComponentInteraction,
    data: &BotContext,
) -> Result<()> {
    match interaction.data.custom_id.as_str() {
        views::CREATE_TICKET_BUTTON => create_ticket(ctx, interaction, data).await,
        views::ADD_USER_BUTTON => {
            open_user_modal(ctx, interaction, views::ADD_USER_MODAL, "Add a user to the ticket")
                .await
        }
        views::REMOVE_USER_BUTTON => {
            open_user_modal(
                ctx,
                interaction,
                views::REMOVE_USER_MODAL,
                "Remove a user from the ticket",
            )
            .await
        }
        views::CLOSE_TICKET_BUTTON => close_ticket(ctx, interaction).await,
        _ => Ok(()),
    }
}

pub async fn dispatch_modal(ctx: &Context, interaction: &ModalInteraction) -> Result<()> {
    match interaction.data.custom_id.as_str() {
        views::ADD_USER_MODAL => update_ticket_access(ctx, interaction, true).await,
        views::REMOVE_USER_MODAL => update_ticket_access(ctx, interaction, false).await,
        _ => Ok(()),
    }
}

/// The `Create Ticket` panel button: builds the overwrite set from the bound
/// role, creates the private channel and posts the control embed into it.
async fn create_ticket(
    ctx: &Context,
    interaction: &ComponentInteraction,
    data: &BotContext,
) -> Result<()> {
    let guild_id = interaction
        .guild_id
        .ok_or_else(|| Error::Ticket("Tickets can only be created inside a guild.".to_string()))?;

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("Ticket is being made for you! :wink:")
                    .ephemeral(true),
            ),
        )
        .await?;

    let bound_role = data.roles.get(guild_id).await?;
    let overwrites: Vec<PermissionOverwrite> =
        access::ticket_access_list(guild_id, data.bot_user_id, interaction.user.id, bound_role)
            .into_iter()
            .map(PermissionOverwrite::from)
            .collect();

    let channel = guild_id
        .create_channel(
            &ctx.http,
            CreateChannel::new(format!("{}-ticket", interaction.user.name))
                .kind(ChannelType::Text)
                .permissions(overwrites),
        )
        .await?;
    info!(
        "created the ticket channel '{}' for user '{}'",
        channel.name, interaction.user.name
    );

    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(format!("Channel created! {}", channel.mention())),
        )
        .await?;

    channel
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(views::ticket_controls_embed(interaction.user.id))
                .components(views::ticket_control_buttons()),
        )
        .await?;

    Ok(())
}

async fn open_user_modal(
    ctx: &Context,
    interaction: &ComponentInteraction,
    modal_id: &str,
    title: &str,
) -> Result<()> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(views::user_id_modal(modal_id, title)),
        )
        .await?;

    Ok(())
}

/// Modal submission for Add User / Remove User: resolves the submitted ID
/// against guild membership and flips the member's read overwrite.
async fn update_ticket_access(
    ctx: &Context,
    interaction: &ModalInteraction,
    can_read: bool,
) -> Result<()> {
    let Some(member) = resolve_submitted_member(ctx, interaction).await else {
        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(INVALID_USER)
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    };

    let channel = guild_channel(ctx, interaction.channel_id).await?;
    channel
        .create_permission(
            &ctx.http,
            access::member_read_overwrite(member.user.id, can_read),
        )
        .await?;

    let confirmation = match can_read {
        true => format!("Added {} to the ticket!", member.mention()),
        false => format!("Removed {} from the ticket!", member.mention()),
    };
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(confirmation),
            ),
        )
        .await?;

    Ok(())
}

/// The `Close Ticket` button: collects the history into a transcript, deletes
/// the channel and delivers the transcript to the closing user by DM.
async fn close_ticket(ctx: &Context, interaction: &ComponentInteraction) -> Result<()> {
    let history = collect_history(&ctx.http, interaction.channel_id).await?;
    let rendered = transcript::render(history.iter().map(|message| message.content.as_str()));

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("Ticket is being closed! :wink:")
                    .ephemeral(true),
            ),
        )
        .await?;
    interaction.channel_id.delete(&ctx.http).await?;

    interaction
        .user
        .direct_message(
            &ctx.http,
            CreateMessage::new()
                .content("Ticket closed successfully! Here is the transcript:")
                .add_file(CreateAttachment::bytes(
                    rendered.into_bytes(),
                    "transcript.txt",
                )),
        )
        .await?;
    info!(
        "closed a ticket channel for user '{}'",
        interaction.user.name
    );

    Ok(())
}

async fn resolve_submitted_member(
    ctx: &Context,
    interaction: &ModalInteraction,
) -> Option<serenity::model::guild::Member> {
    let guild_id = interaction.guild_id?;
    let raw_id = submitted_user_id(interaction)?;

    guild_id
        .member(&ctx.http, UserId::new(raw_id))
        .await
        .ok()
}

fn submitted_user_id(interaction: &ModalInteraction) -> Option<u64> {
    let value = interaction
        .data
        .components
        .iter()
        .flat_map(|row| &row.components)
        .find_map(|component| match component {
            ActionRowComponent::InputText(input)
                if input.custom_id == views::USER_ID_INPUT =>
            {
                input.value.as_deref()
            }
            _ => None,
        })?;

    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

async fn guild_channel(ctx: &Context, channel_id: ChannelId) -> Result<GuildChannel> {
    channel_id
        .to_channel(&ctx.http)
        .await?
        .guild()
        .ok_or_else(|| Error::Ticket("The ticket channel is not part of a guild.".to_string()))
}

/// Fetches the full channel history, oldest message first. The messages
/// endpoint pages newest-first with at most 100 entries per call.
async fn collect_history(http: &Http, channel_id: ChannelId) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    let mut before: Option<MessageId> = None;

    loop {
        let mut request = GetMessages::new().limit(100);
        if let Some(oldest_seen) = before {
            request = request.before(oldest_seen);
        }

        let batch = channel_id.messages(http, request).await?;
        let last_page = batch.len() < 100;
        before = batch.last().map(|message| message.id);
        messages.extend(batch);

        if last_page {
            break;
        }
    }
    messages.reverse();

    Ok(messages)
}
