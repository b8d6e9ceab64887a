use serenity::client::{Context, FullEvent};
use serenity::model::application::Interaction;
use tracing::info;

use crate::error::{Error, Result};
use crate::state::BotContext;
use crate::tickets;

/// Routes gateway events that live outside the command framework: the ready
/// notification and the persistent ticket buttons/modals.
pub async fn handle(
    ctx: &Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, BotContext, Error>,
    data: &BotContext,
) -> Result<()> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!("{} is connected!", data_about_bot.user.name);
        }
        FullEvent::InteractionCreate { interaction } => match interaction {
            Interaction::Component(component) => {
                tickets::handlers::dispatch_component(ctx, component, data).await?;
            }
            Interaction::Modal(modal) => {
                tickets::handlers::dispatch_modal(ctx, modal).await?;
            }
            _ => (),
        },
        _ => (),
    }

    Ok(())
}
