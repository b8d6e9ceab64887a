use crate::commands::Context;
use crate::error::Result;

#[poise::command(prefix_command, track_edits)]
pub async fn help(ctx: Context<'_>, #[rest] command: Option<String>) -> Result<()> {
    let configuration = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: "My prefix is `,`",
        ..Default::default()
    };
    poise::builtins::help(ctx, command.as_deref(), configuration).await?;

    Ok(())
}
