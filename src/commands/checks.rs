// Shared command checks and helpers

use tracing::debug;

use crate::features::access;
use crate::models::guild::GuildConfig;
use crate::{Context, Error};

/// Allow-list check for privileged commands.
/// Makes sure the guild has a config first, then checks the caller's user ID.
pub async fn authorized(ctx: Context<'_>) -> Result<bool, Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(false);
    };
    let store = &ctx.data().store;

    let allowed = access::authorize(store, guild_id.get(), ctx.author().id.get()).await?;
    if !allowed {
        debug!(
            "Denied /{} for user {} in guild {}",
            ctx.command().name,
            ctx.author().id,
            guild_id
        );
    }

    Ok(allowed)
}

/// Config of the guild the command was invoked in
pub async fn guild_config(ctx: Context<'_>) -> Result<GuildConfig, Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("This command can only be used in a server.")?;
    Ok(ctx.data().store.guild(guild_id.get()).await?)
}

pub async fn reply_ephemeral(ctx: Context<'_>, content: impl Into<String>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
