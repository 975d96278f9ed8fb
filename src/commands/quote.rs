use crate::commands::checks::{authorized, guild_config, reply_ephemeral};
use crate::features::relay::{self, CountOutcome, QuoteOutcome};
use crate::utils::config::messages;
use crate::utils::formatters::{no_quotes_message, quote_sent_message, total_quotes_message};
use crate::{Context, Error};

/// Send a random quote from the source channel to the target channel
#[poise::command(slash_command, guild_only, check = "authorized")]
pub async fn quote(ctx: Context<'_>) -> Result<(), Error> {
    let config = guild_config(ctx).await?;

    // Scanning the whole history easily takes longer than Discord's reply
    // window, so the flow defers once the channels resolved
    match relay::quote_for_guild(&ctx.data().platform, &config, ctx.defer()).await? {
        QuoteOutcome::NotConfigured => reply_ephemeral(ctx, messages::NOT_CONFIGURED).await?,
        QuoteOutcome::Unresolved => reply_ephemeral(ctx, messages::UNRESOLVED).await?,
        QuoteOutcome::NoQuotes(source) => {
            ctx.say(no_quotes_message(&source)).await?;
        }
        QuoteOutcome::Sent(target) => {
            ctx.say(quote_sent_message(&target)).await?;
        }
    }

    Ok(())
}

/// Display the total amount of correctly formatted quotes in the source channel
#[poise::command(slash_command, guild_only, check = "authorized")]
pub async fn total_quotes(ctx: Context<'_>) -> Result<(), Error> {
    let config = guild_config(ctx).await?;

    match relay::count_for_guild(&ctx.data().platform, &config, ctx.defer()).await? {
        CountOutcome::NotConfigured => {
            reply_ephemeral(ctx, messages::SOURCE_NOT_CONFIGURED).await?
        }
        CountOutcome::Unresolved => reply_ephemeral(ctx, messages::UNRESOLVED).await?,
        CountOutcome::Counted { total, source } => {
            ctx.say(total_quotes_message(total, &source)).await?;
        }
    }

    Ok(())
}
