use poise::CreateReply;
use serenity::builder::CreateEmbed;
use serenity::model::colour::Colour;

use crate::commands::Context;
use crate::error::Result;

/// Get a link to the store
#[poise::command(prefix_command, category = "Info")]
pub async fn store(ctx: Context<'_>) -> Result<()> {
    let embed = CreateEmbed::new()
        .title("My Store!")
        .description("https://h3lpeds-store.sellix.io/")
        .colour(Colour::PURPLE);
    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

const CASHAPP_QR_IMAGE: &str =
    "https://media.discordapp.net/attachments/1043646377319739422/1045147863417639002/IMG_5219.png";

/// Get the Cashapp payment details
#[poise::command(prefix_command, category = "Info")]
pub async fn cashapp(ctx: Context<'_>) -> Result<()> {
    ctx.send(CreateReply::default().embed(cashapp_embed()))
        .await?;

    Ok(())
}

fn cashapp_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("Cashapp")
        .description("Cashapp: https://cash.app/$h3lped")
        .colour(Colour::PURPLE)
        .image(CASHAPP_QR_IMAGE)
}

/// Get the list of accepted crypto wallets
#[poise::command(prefix_command, category = "Info")]
pub async fn crypto(ctx: Context<'_>) -> Result<()> {
    let embed = CreateEmbed::new()
        .title("Crypto Wallets")
        .description(
            "My crypto wallets (if the crypto is not listed, tell me and i will see if i can accept it)",
        )
        .field("Bitcoin", "bc1qpk407aahx69frvaxzq2wmp968utj654767kn0h", false)
        .field("Ethereum", "0x82A99144149373f96710Dd24be9e6C233264D616", false)
        .field("Litecoin", "LNJ91UYHxBj6ciBuMPWfsk3BUqePPWMtQz", false);
    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
