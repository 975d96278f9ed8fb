use poise::serenity_prelude as serenity;
use tracing::info;

use crate::commands::checks::{authorized, guild_config, reply_ephemeral};
use crate::features::channels::{self, ChannelCapabilities, Resolution};
use crate::models::guild::ChannelField;
use crate::utils::config::messages;
use crate::utils::embeds::info_embed;
use crate::utils::formatters::{channel_mention, channel_updated_message};
use crate::{Context, Error};

/// Set the channel quotes are read from
#[poise::command(slash_command, guild_only, check = "authorized")]
pub async fn source(
    ctx: Context<'_>,
    #[description = "Channel or thread containing the quotes"]
    #[channel_types("Text", "News", "PublicThread", "PrivateThread", "NewsThread")]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    set_channel(ctx, ChannelField::Source, &channel).await
}

/// Set the channel quotes are posted to
#[poise::command(slash_command, guild_only, check = "authorized")]
pub async fn target(
    ctx: Context<'_>,
    #[description = "Channel or thread to post quotes in"]
    #[channel_types(
        "Text",
        "News",
        "PublicThread",
        "PrivateThread",
        "NewsThread",
        "Voice",
        "Stage"
    )]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    set_channel(ctx, ChannelField::Target, &channel).await
}

async fn set_channel(
    ctx: Context<'_>,
    field: ChannelField,
    channel: &serenity::GuildChannel,
) -> Result<(), Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("This command can only be used in a server.")?;

    ctx.data()
        .store
        .set_channel(guild_id.get(), field, channel.id.get())
        .await?;
    info!(
        "Guild {}: {} channel set to {} by {}",
        guild_id,
        field.label(),
        channel.id,
        ctx.author().id
    );

    ctx.say(channel_updated_message(
        field.label(),
        &channel_mention(channel.id.get()),
    ))
    .await?;
    Ok(())
}

/// Display the current source and target channel
#[poise::command(slash_command, guild_only, check = "authorized")]
pub async fn info(ctx: Context<'_>) -> Result<(), Error> {
    let config = guild_config(ctx).await?;

    let (source, target) = match channels::resolve(&ctx.data().platform, &config).await {
        Resolution::Ready(pair) => pair,
        Resolution::Unconfigured => return reply_ephemeral(ctx, messages::NOT_CONFIGURED).await,
        Resolution::Unresolved => return reply_ephemeral(ctx, messages::UNRESOLVED).await,
    };

    let embed = info_embed(&source.mention(), &target.mention());
    ctx.send(poise::CreateReply::default().embed(embed.to_embed()))
        .await?;

    Ok(())
}
