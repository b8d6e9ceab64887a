use std::time::Duration;

use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::collector::MessageCollector;
use serenity::model::channel::{GuildChannel, ReactionType};
use serenity::model::colour::Colour;
use serenity::model::id::{ChannelId, MessageId, UserId};
use serenity::model::mention::Mentionable;
use tracing::info;

use crate::commands::Context;
use crate::commands::giveaway::parser::{self, ParseDurationError};
use crate::commands::giveaway::winner;
use crate::error::{Error, Result};

const ANSWER_TIMEOUT: Duration = Duration::from_secs(15);
const PARTY_POPPER: &str = "\u{1F389}";
const INCORRECT_ID: &str = "The id was entered incorrectly.";
const REACTION_PAGE_SIZE: u8 = 100;

const QUESTIONS: [&str; 3] = [
    "Which channel should it be hosted in?",
    "What should be the duration of the giveaway? (s|m|h|d)",
    "What is the prize of the giveaway?",
];

/// Start a giveaway through a short question/answer session
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Giveaways"
)]
pub async fn gstart(ctx: Context<'_>) -> Result<()> {
    ctx.say("answer the questions within 15 seconds to start the giveaway")
        .await?;

    let mut answers = Vec::with_capacity(QUESTIONS.len());
    for question in QUESTIONS {
        ctx.say(question).await?;

        let answer = MessageCollector::new(&ctx.serenity_context().shard)
            .channel_id(ctx.channel_id())
            .author_id(ctx.author().id)
            .timeout(ANSWER_TIMEOUT)
            .await;
        match answer {
            Some(message) => answers.push(message.content.clone()),
            None => {
                ctx.say("You didn't answer in time, please be quicker next time!")
                    .await?;
                return Ok(());
            }
        }
    }

    let Some(channel_id) = parser::parse_channel_mention(&answers[0]) else {
        ctx.say("You didn't mention a channel properly. Use a #channel mention next time.")
            .await?;
        return Ok(());
    };
    let duration_secs = match parser::parse_duration(&answers[1]) {
        Ok(seconds) => seconds,
        Err(ParseDurationError::UnknownUnit) => {
            ctx.say("You didn't answer the time with a proper unit. Use (s|m|h|d) next time!")
                .await?;
            return Ok(());
        }
        Err(ParseDurationError::InvalidMagnitude) => {
            ctx.say("The time must be an integer. Please enter an integer next time")
                .await?;
            return Ok(());
        }
    };
    let prize = answers[2].clone();

    ctx.say(format!(
        "The Giveaway will be in {} and will last {}",
        channel_id.mention(),
        &answers[1]
    ))
    .await?;

    let embed = CreateEmbed::new()
        .title("Giveaway!")
        .description(&prize)
        .colour(Colour::PURPLE)
        .field("Hosted by:", ctx.author().mention().to_string(), false)
        .footer(CreateEmbedFooter::new(format!(
            "Ends {} from now!",
            &answers[1]
        )));
    let announcement = channel_id
        .send_message(ctx.http(), CreateMessage::new().embed(embed))
        .await?;
    announcement
        .react(ctx.http(), ReactionType::Unicode(PARTY_POPPER.to_string()))
        .await?;

    info!(
        "giveaway for '{}' is running in channel {} for {} seconds",
        prize, channel_id, duration_secs
    );
    tokio::time::sleep(Duration::from_secs(duration_secs)).await;

    let reactor_ids = fetch_reactor_ids(&ctx, channel_id, announcement.id).await?;
    match winner::pick_winner(&reactor_ids, ctx.data().bot_user_id) {
        Ok(winner) => {
            channel_id
                .say(
                    ctx.http(),
                    format!("Congratulations! {} won {}!", winner.mention(), prize),
                )
                .await?;
        }
        Err(Error::Giveaway(reason)) => {
            channel_id.say(ctx.http(), reason).await?;
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

/// Reroll the winner of a finished giveaway
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Giveaways"
)]
pub async fn greroll(ctx: Context<'_>, channel: GuildChannel, message_id: u64) -> Result<()> {
    announce_from_message(ctx, channel.id, message_id, |winner| {
        format!("The new winner is {}!", winner.mention())
    })
    .await
}

/// End a giveaway early and announce the winner
#[poise::command(
    prefix_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    category = "Giveaways"
)]
pub async fn gend(ctx: Context<'_>, channel: GuildChannel, message_id: u64) -> Result<()> {
    announce_from_message(ctx, channel.id, message_id, |winner| {
        format!(
            "The giveaway has ended and the winner is {}!",
            winner.mention()
        )
    })
    .await
}

/// Shared tail of `greroll`/`gend`: picks a fresh winner from an existing
/// announcement message. An unfetchable message only produces the incorrect
/// id reply, nothing is posted to the giveaway channel.
async fn announce_from_message(
    ctx: Context<'_>,
    channel_id: ChannelId,
    raw_message_id: u64,
    announcement: impl FnOnce(UserId) -> String,
) -> Result<()> {
    if raw_message_id == 0 {
        ctx.say(INCORRECT_ID).await?;
        return Ok(());
    }

    let reactor_ids =
        match fetch_reactor_ids(&ctx, channel_id, MessageId::new(raw_message_id)).await {
            Ok(reactor_ids) => reactor_ids,
            Err(Error::Serenity(_)) => {
                ctx.say(INCORRECT_ID).await?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

    match winner::pick_winner(&reactor_ids, ctx.data().bot_user_id) {
        Ok(winner) => {
            channel_id.say(ctx.http(), announcement(winner)).await?;
        }
        Err(Error::Giveaway(reason)) => {
            channel_id.say(ctx.http(), reason).await?;
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

/// Fetches every reactor of the announcement message. The reactions endpoint
/// pages in ascending user ID order with at most 100 users per call.
async fn fetch_reactor_ids(
    ctx: &Context<'_>,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Result<Vec<UserId>> {
    let message = channel_id.message(ctx.http(), message_id).await?;

    let mut reactor_ids: Vec<UserId> = Vec::new();
    let mut after: Option<UserId> = None;
    loop {
        let page = message
            .reaction_users(
                ctx.http(),
                ReactionType::Unicode(PARTY_POPPER.to_string()),
                Some(REACTION_PAGE_SIZE),
                after,
            )
            .await?;
        let page_ids: Vec<UserId> = page.iter().map(|user| user.id).collect();
        after = next_page_cursor(&page_ids);
        reactor_ids.extend(page_ids);

        if after.is_none() {
            break;
        }
    }

    Ok(reactor_ids)
}

/// The cursor for the next reactions page, or `None` when a page shorter
/// than the page size means the whole set has been read.
fn next_page_cursor(page_ids: &[UserId]) -> Option<UserId> {
    match page_ids.len() < REACTION_PAGE_SIZE as usize {
        true => None,
        false => page_ids.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use serenity::model::id::UserId;

    use crate::commands::giveaway::handlers::{REACTION_PAGE_SIZE, next_page_cursor};

    fn page_of(len: u64) -> Vec<UserId> {
        (1..=len).map(UserId::new).collect()
    }

    #[test]
    fn test_full_page_continues_from_the_last_reactor() {
        let page = page_of(REACTION_PAGE_SIZE as u64);
        assert_eq!(
            next_page_cursor(&page),
            Some(UserId::new(REACTION_PAGE_SIZE as u64))
        );
    }

    #[test]
    fn test_short_page_is_the_last_one() {
        assert_eq!(next_page_cursor(&page_of(REACTION_PAGE_SIZE as u64 - 1)), None);
        assert_eq!(next_page_cursor(&page_of(1)), None);
    }

    #[test]
    fn test_empty_page_stops_the_pagination() {
        assert_eq!(next_page_cursor(&[]), None);
    }
}
