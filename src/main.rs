pub mod commands;
pub mod db;
pub mod error;
pub mod events;
pub mod state;
pub mod tickets;

use std::env;

use poise::serenity_prelude::GatewayIntents;
use serenity::client::Client;
use tracing::error;

use crate::db::RoleRegistry;
use crate::error::Error;
use crate::state::BotContext;

async fn on_error(error: poise::FrameworkError<'_, BotContext, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Command '{}' failed: {}",
                ctx.command().qualified_name,
                error
            );
        }
        other => {
            if let Err(err) = poise::builtins::on_error(other).await {
                error!("Error while handling a command error: {}", err);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let token = env::var("DISCORD_TOKEN").expect("Expected a DISCORD_TOKEN in the environment");
    let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "tickets.db".to_string());
    let pool = db::connect(&database_path)
        .await
        .expect("Cannot open the bot database");

    let framework = poise::Framework::<BotContext, Error>::builder()
        .options(poise::FrameworkOptions {
            commands: commands::get_commands_list(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(",".to_string()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move { Ok(BotContext::new(RoleRegistry::new(pool), ready.user.id)) })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&token, intents)
        .framework(framework)
        .await
        .expect("Cannot create a Discord client");

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
