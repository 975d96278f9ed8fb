// Quotebook - Rust Edition
// Relays random quotes from a quote channel to a target channel

mod api;
mod commands;
mod features;
mod models;
mod storage;
mod utils;

use std::env;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::discord::DiscordPlatform;
use crate::storage::config_store::ConfigStore;
use crate::utils::config::{messages, BotConfig};

/// User data shared across all commands
pub struct Data {
    pub store: Arc<ConfigStore>,
    pub platform: DiscordPlatform,
}

// Manual Debug impl since the platform holds serenity's Http client
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("store", &self.store.path())
            .field("platform", &"DiscordPlatform")
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Register all slash commands
fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        commands::quote::quote(),
        commands::quote::total_quotes(),
        commands::channels::source(),
        commands::channels::target(),
        commands::channels::info(),
        commands::id::id(),
        commands::help::help(),
    ]
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        // Check returned false: caller is not on the allow-list
        poise::FrameworkError::CommandCheckFailed { error: None, ctx, .. } => {
            let _ = commands::checks::reply_ephemeral(ctx, messages::UNAUTHORIZED).await;
        }
        poise::FrameworkError::CommandCheckFailed { error: Some(error), ctx, .. } => {
            error!("Check error in /{}: {:?}", ctx.command().name, error);
            let _ = commands::checks::reply_ephemeral(ctx, messages::GENERIC_FAILURE).await;
        }
        // After `/quote` or `/total_quotes` deferred, Discord turns this first
        // follow-up into an edit of the public "thinking" message, so the
        // failure notice is visible to the channel there
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command error in /{}: {:?}", ctx.command().name, error);
            let _ = commands::checks::reply_ephemeral(ctx, messages::GENERIC_FAILURE).await;
        }
        err => {
            if let Err(e) = poise::builtins::on_error(err).await {
                error!("Error while handling error: {:?}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "quotebook_rs=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;

    info!("Starting Quotebook (Rust Edition)...");

    let store = ConfigStore::new(&config.config_path, config.bootstrap_admin.clone());
    store.init().await?;
    let store = Arc::new(store);
    info!("Config store ready at {}", config.config_path);

    let framework_store = Arc::clone(&store);
    let guild_id = config.guild_id;

    // Setup framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: get_commands(),
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, _framework, data| {
                Box::pin(features::guild_events::handle_event(ctx, event, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready! Registering commands...");
                let commands = &framework.options().commands;
                match guild_id {
                    Some(id) => {
                        let guild = serenity::GuildId::new(id);
                        poise::builtins::register_in_guild(ctx, commands, guild).await?;
                        info!("Commands registered to guild {}", id);
                    }
                    None => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        info!("Commands registered globally");
                    }
                }

                Ok(Data {
                    store: framework_store,
                    platform: DiscordPlatform::new(ctx.http.clone()),
                })
            })
        })
        .build();

    // MESSAGE_CONTENT is privileged; enable it in the Discord Dev Portal,
    // otherwise history comes back with empty message bodies
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to register Ctrl+C handler: {:?}", e);
            return;
        }
        info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
    Ok(())
}
