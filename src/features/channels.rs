// Channel capabilities and resolution of a guild's configured channels

use async_trait::async_trait;
use tracing::warn;

use crate::models::guild::GuildConfig;
use crate::models::quote::QuoteHistory;
use crate::utils::embeds::EmbedContent;

/// What a resolved channel-like object can do
pub trait ChannelCapabilities {
    /// Message history can be read (source channels)
    fn supports_history(&self) -> bool;
    /// Messages can be posted (target channels)
    fn supports_post(&self) -> bool;
    fn mention(&self) -> String;
}

/// The chat platform operations the bot needs
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    type Channel: ChannelCapabilities + Send + Sync;

    async fn fetch_channel(&self, channel_id: u64) -> anyhow::Result<Self::Channel>;

    /// Scan the whole history of `channel` and extract its quotes
    async fn quote_history(&self, channel: &Self::Channel) -> anyhow::Result<QuoteHistory>;

    async fn post_embed(&self, channel: &Self::Channel, embed: &EmbedContent) -> anyhow::Result<()>;
}

/// Outcome of looking up configured channels
#[derive(Debug)]
pub enum Resolution<T> {
    /// A required channel ID is not set
    Unconfigured,
    /// Lookup failed or the channel lacks a needed capability
    Unresolved,
    Ready(T),
}

/// Resolve source and target channels of a guild config
pub async fn resolve<P: ChatPlatform>(
    platform: &P,
    config: &GuildConfig,
) -> Resolution<(P::Channel, P::Channel)> {
    let (Some(source_id), Some(target_id)) = (config.source_channel, config.target_channel) else {
        return Resolution::Unconfigured;
    };

    let Some(source) = fetch_source(platform, source_id).await else {
        return Resolution::Unresolved;
    };
    let Some(target) = fetch_target(platform, target_id).await else {
        return Resolution::Unresolved;
    };

    Resolution::Ready((source, target))
}

/// Resolve only the source channel
pub async fn resolve_source<P: ChatPlatform>(
    platform: &P,
    config: &GuildConfig,
) -> Resolution<P::Channel> {
    let Some(source_id) = config.source_channel else {
        return Resolution::Unconfigured;
    };

    match fetch_source(platform, source_id).await {
        Some(source) => Resolution::Ready(source),
        None => Resolution::Unresolved,
    }
}

async fn fetch_source<P: ChatPlatform>(platform: &P, channel_id: u64) -> Option<P::Channel> {
    let channel = fetch_logged(platform, channel_id).await?;
    if !channel.supports_history() {
        warn!("Source channel {} does not support message history", channel_id);
        return None;
    }
    Some(channel)
}

async fn fetch_target<P: ChatPlatform>(platform: &P, channel_id: u64) -> Option<P::Channel> {
    let channel = fetch_logged(platform, channel_id).await?;
    if !channel.supports_post() {
        warn!("Target channel {} does not accept messages", channel_id);
        return None;
    }
    Some(channel)
}

// The platform error is only logged; callers get a uniform "unresolved"
async fn fetch_logged<P: ChatPlatform>(platform: &P, channel_id: u64) -> Option<P::Channel> {
    match platform.fetch_channel(channel_id).await {
        Ok(channel) => Some(channel),
        Err(e) => {
            warn!("Failed to resolve channel {}: {:?}", channel_id, e);
            None
        }
    }
}
