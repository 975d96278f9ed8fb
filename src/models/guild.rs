use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Guild (Server) specific configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GuildConfig {
    /// Channel ID quotes are read from
    pub source_channel: Option<u64>,
    /// Channel ID quotes are posted to
    pub target_channel: Option<u64>,
    /// User IDs allowed to run the privileged commands
    #[serde(default)]
    pub authorized_users: Vec<String>,
    /// Fields written by other tools, kept as-is on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GuildConfig {
    /// Fresh config for a guild we have not seen before
    pub fn with_admin(admin_id: impl Into<String>) -> Self {
        Self {
            authorized_users: vec![admin_id.into()],
            ..Default::default()
        }
    }

    pub fn set_channel(&mut self, field: ChannelField, channel_id: u64) {
        match field {
            ChannelField::Source => self.source_channel = Some(channel_id),
            ChannelField::Target => self.target_channel = Some(channel_id),
        }
    }
}

/// The channel slots a guild can configure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelField {
    Source,
    Target,
}

impl ChannelField {
    /// Key used in the config document
    pub fn key(self) -> &'static str {
        match self {
            ChannelField::Source => "source_channel",
            ChannelField::Target => "target_channel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelField::Source => "source",
            ChannelField::Target => "target",
        }
    }
}

/// Whole config file: guild ID (as string) -> guild config
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ConfigDocument {
    pub guilds: BTreeMap<String, GuildConfig>,
}

impl ConfigDocument {
    pub fn guild(&self, guild_id: u64) -> Option<&GuildConfig> {
        self.guilds.get(&guild_id.to_string())
    }

    pub fn guild_mut(&mut self, guild_id: u64) -> Option<&mut GuildConfig> {
        self.guilds.get_mut(&guild_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_guild_has_all_fields() {
        let config = GuildConfig::with_admin("42");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["source_channel"], Value::Null);
        assert_eq!(json["target_channel"], Value::Null);
        assert_eq!(json["authorized_users"], serde_json::json!(["42"]));
    }

    #[test]
    fn test_document_is_flat_guild_map() {
        let raw = r#"{
            "123": {
                "source_channel": 1,
                "target_channel": null,
                "authorized_users": ["9"],
                "note": "kept"
            }
        }"#;
        let doc: ConfigDocument = serde_json::from_str(raw).unwrap();
        let guild = doc.guild(123).unwrap();

        assert_eq!(guild.source_channel, Some(1));
        assert_eq!(guild.target_channel, None);
        assert_eq!(guild.authorized_users, vec!["9".to_string()]);
        assert_eq!(guild.extra["note"], "kept");

        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["123"]["note"], "kept");
    }

    #[test]
    fn test_set_channel() {
        let mut config = GuildConfig::default();
        config.set_channel(ChannelField::Target, 77);

        assert_eq!(config.target_channel, Some(77));
        assert_eq!(config.source_channel, None);
        assert_eq!(ChannelField::Target.key(), "target_channel");
    }
}
