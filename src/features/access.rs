// Per-guild allow-list checks

use crate::storage::config_store::{ConfigStore, StoreError};

/// True iff `user_id` is on the guild's authorized list.
/// Always reads the store, nothing is cached between calls.
pub async fn is_authorized(
    store: &ConfigStore,
    guild_id: u64,
    user_id: u64,
) -> Result<bool, StoreError> {
    match store.authorized_users(guild_id).await {
        Ok(users) => Ok(users.iter().any(|id| *id == user_id.to_string())),
        Err(StoreError::GuildNotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Gate for privileged commands. A guild seen for the first time gets its
/// default config written before the check, even if the caller is denied.
pub async fn authorize(
    store: &ConfigStore,
    guild_id: u64,
    user_id: u64,
) -> Result<bool, StoreError> {
    store.ensure_guild(guild_id).await?;
    is_authorized(store, guild_id, user_id).await
}
