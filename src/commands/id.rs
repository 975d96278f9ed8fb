use crate::{Context, Error};

/// Get the ID of the current channel
#[poise::command(slash_command, prefix_command)]
pub async fn id(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(format!("Current channel ID: {}", ctx.channel_id()))
        .await?;
    Ok(())
}
