// Centralized configuration for Quotebook

use std::env;

use anyhow::{anyhow, Context, Result};

/// Where the guild config document lives unless overridden
pub const DEFAULT_CONFIG_PATH: &str = "data/config.json";

/// Original administrator, authorized in every newly joined guild
pub const DEFAULT_BOOTSTRAP_ADMIN: &str = "514782845181624330";

/// Discord embed colors
pub mod colors {
    pub const QUOTE: u32 = 0x82b6d9;
    pub const INFO: u32 = 0xa0e77d;
    pub const PRIMARY: u32 = 0x00bfff;
}

/// Fixed replies shown to users
pub mod messages {
    pub const NOT_CONFIGURED: &str = "No source and/or target channel set!";
    pub const SOURCE_NOT_CONFIGURED: &str = "No source channel set!";
    pub const UNRESOLVED: &str = "The configured channel is not set or I can't access it. \
        Check `/info` and the bot's permissions.";
    pub const UNAUTHORIZED: &str = "You are not authorized to use this command!";
    pub const GENERIC_FAILURE: &str = "Something went wrong. Please contact the bot operator.";
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Register commands only in this guild (fast sync while developing)
    pub guild_id: Option<u64>,
    pub config_path: String,
    pub bootstrap_admin: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN environment variable not set"))?;

        let guild_id = lookup("GUILD_ID")
            .map(|raw| parse_guild_id(&raw))
            .transpose()?;

        Ok(Self {
            token,
            guild_id,
            config_path: lookup("QUOTEBOOK_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
            bootstrap_admin: lookup("BOOTSTRAP_ADMIN_ID")
                .unwrap_or_else(|| DEFAULT_BOOTSTRAP_ADMIN.to_string()),
        })
    }
}

fn parse_guild_id(raw: &str) -> Result<u64> {
    let id: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("GUILD_ID must be a number, but got: {}", raw))?;
    if id == 0 {
        return Err(anyhow!("GUILD_ID must not be 0"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        assert!(BotConfig::from_lookup(lookup(&[])).is_err());
        assert!(BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.token, "abc");
        assert_eq!(config.guild_id, None);
        assert_eq!(config.config_path, DEFAULT_CONFIG_PATH);
        assert_eq!(config.bootstrap_admin, DEFAULT_BOOTSTRAP_ADMIN);
    }

    #[test]
    fn test_guild_id() {
        let config = BotConfig::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("GUILD_ID", "1234"),
        ]))
        .unwrap();
        assert_eq!(config.guild_id, Some(1234));

        let bad = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", "abc")]));
        assert!(bad.is_err());
        let zero = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "abc"), ("GUILD_ID", "0")]));
        assert!(zero.is_err());
    }
}
