// Discord implementation of the chat platform operations

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::StreamExt;
use poise::serenity_prelude as serenity;
use serenity::{Channel, ChannelType};
use tracing::debug;

use crate::features::channels::{ChannelCapabilities, ChatPlatform};
use crate::features::quotes;
use crate::models::quote::QuoteHistory;
use crate::utils::embeds::EmbedContent;
use crate::utils::formatters::channel_mention;

impl ChannelCapabilities for Channel {
    fn supports_history(&self) -> bool {
        match self {
            Channel::Guild(channel) => matches!(
                channel.kind,
                ChannelType::Text
                    | ChannelType::News
                    | ChannelType::PublicThread
                    | ChannelType::PrivateThread
                    | ChannelType::NewsThread
            ),
            _ => false,
        }
    }

    fn supports_post(&self) -> bool {
        match self {
            Channel::Guild(channel) => matches!(
                channel.kind,
                ChannelType::Text
                    | ChannelType::News
                    | ChannelType::PublicThread
                    | ChannelType::PrivateThread
                    | ChannelType::NewsThread
                    | ChannelType::Voice
                    | ChannelType::Stage
            ),
            Channel::Private(_) => true,
            _ => false,
        }
    }

    fn mention(&self) -> String {
        channel_mention(self.id().get())
    }
}

/// Talks to Discord over serenity's HTTP client
pub struct DiscordPlatform {
    http: Arc<serenity::Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    type Channel = Channel;

    async fn fetch_channel(&self, channel_id: u64) -> Result<Channel> {
        if channel_id == 0 {
            return Err(anyhow!("Malformed channel id 0"));
        }
        Ok(self.http.get_channel(serenity::ChannelId::new(channel_id)).await?)
    }

    async fn quote_history(&self, channel: &Channel) -> Result<QuoteHistory> {
        // Pages through the entire history, newest first; only matches are kept
        let contents = channel
            .id()
            .messages_iter(Arc::clone(&self.http))
            .map(|message| message.map(|message| message.content));
        let (history, scanned) = quotes::extract_stream(contents).await?;

        debug!(
            "Scanned {} messages in {}, {} contained quotes",
            scanned,
            channel.id(),
            history.len()
        );
        Ok(history)
    }

    async fn post_embed(&self, channel: &Channel, embed: &EmbedContent) -> Result<()> {
        channel
            .id()
            .send_message(&self.http, serenity::CreateMessage::new().embed(embed.to_embed()))
            .await?;
        Ok(())
    }
}
