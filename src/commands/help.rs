// Help command - show usage guide

use poise::serenity_prelude as serenity;
use crate::{Context, Error};
use crate::utils::config::colors;

/// Show help and usage guide
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("📜 Quotebook - Help")
        .description("Relays random quotes from a quote channel")
        .color(colors::PRIMARY)
        .field(
            "💬 Quotes",
            "`/quote` - Post a random quote to the target channel\n\
            `/total_quotes` - Count the quotes in the source channel",
            false,
        )
        .field(
            "⚙️ Configuration",
            "`/source` - Set the channel quotes are read from\n\
            `/target` - Set the channel quotes are posted to\n\
            `/info` - Show the configured channels",
            false,
        )
        .field(
            "✍️ Quote format",
            "A quote in double quotes, the author on the next line:\n\
            ```\n\"Do or do not.\"\n-Yoda\n```",
            false,
        )
        .field(
            "🔧 Misc",
            "`/id` - Show the current channel ID",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(
            "Quote and configuration commands are limited to authorized users",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
