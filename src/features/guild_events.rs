// Gateway event handling

use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::{Data, Error};

/// Handle gateway events outside of commands
pub async fn handle_event(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Logged in as {}", data_about_bot.user.name);
        }
        // Sent for every guild on connect and whenever the bot joins a new one
        serenity::FullEvent::GuildCreate { guild, .. } => {
            match data.store.ensure_guild(guild.id.get()).await {
                Ok(true) => info!("Joined guild {} ({})", guild.name, guild.id),
                Ok(false) => {}
                Err(e) => error!("Failed to initialize config for guild {}: {:?}", guild.id, e),
            }
        }
        _ => {}
    }

    Ok(())
}
