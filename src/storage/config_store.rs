// JSON file backed guild configuration store
//
// Every mutation loads the whole document, changes it and writes it back.
// Mutations are serialized through `write_lock` so two commands racing in
// this process can't drop each other's update.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::guild::{ChannelField, ConfigDocument, GuildConfig};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No config for guild {0}")]
    GuildNotFound(u64),
}

pub struct ConfigStore {
    path: PathBuf,
    bootstrap_admin: String,
    write_lock: Mutex<()>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>, bootstrap_admin: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            bootstrap_admin: bootstrap_admin.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document (and its directory) on first run
    pub async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        if tokio::fs::try_exists(&self.path).await? {
            // Fail early on a corrupt file instead of on the first command
            self.read().await?;
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.write(&ConfigDocument::default()).await?;
        info!("Created empty config at {}", self.path.display());
        Ok(())
    }

    /// Load the full configuration document
    pub async fn read(&self) -> Result<ConfigDocument, StoreError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Config of one guild
    pub async fn guild(&self, guild_id: u64) -> Result<GuildConfig, StoreError> {
        self.read()
            .await?
            .guild(guild_id)
            .cloned()
            .ok_or(StoreError::GuildNotFound(guild_id))
    }

    /// Insert default config for a guild if it has none yet.
    /// Returns true when a new entry was created.
    pub async fn ensure_guild(&self, guild_id: u64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.read().await?;
        if doc.guild(guild_id).is_some() {
            return Ok(false);
        }

        doc.guilds.insert(
            guild_id.to_string(),
            GuildConfig::with_admin(self.bootstrap_admin.clone()),
        );
        self.write(&doc).await?;
        info!("Initialized config for guild {}", guild_id);
        Ok(true)
    }

    /// Set the source or target channel of an existing guild
    pub async fn set_channel(
        &self,
        guild_id: u64,
        field: ChannelField,
        channel_id: u64,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.read().await?;
        doc.guild_mut(guild_id)
            .ok_or(StoreError::GuildNotFound(guild_id))?
            .set_channel(field, channel_id);
        self.write(&doc).await?;
        debug!("Guild {}: {} = {}", guild_id, field.key(), channel_id);
        Ok(())
    }

    pub async fn authorized_users(&self, guild_id: u64) -> Result<Vec<String>, StoreError> {
        Ok(self.guild(guild_id).await?.authorized_users)
    }

    /// Write to a temp file next to the document, then swap it in
    async fn write(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut serializer)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &buf).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
