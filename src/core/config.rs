//! Environment configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.7.0

use anyhow::{Context, Result};
use std::env;

/// Bot configuration loaded from environment variables (and `.env` if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<u64>,
    pub owner_id: u64,
    pub co_owner_ids: Vec<u64>,
    pub success_emoji: String,
    pub warning_emoji: String,
    pub error_emoji: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let owner_id = lookup("OWNER_ID")
            .context("OWNER_ID must be set")?
            .trim()
            .parse::<u64>()
            .context("OWNER_ID must be a numeric user id")?;

        let co_owner_ids = match lookup("CO_OWNER_IDS") {
            Some(raw) => parse_id_list(&raw).context("CO_OWNER_IDS must be comma-separated user ids")?,
            None => Vec::new(),
        };

        let discord_guild_id = lookup("DISCORD_GUILD_ID")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().parse::<u64>())
            .transpose()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?;

        Ok(Config {
            discord_token,
            discord_guild_id,
            owner_id,
            co_owner_ids,
            success_emoji: lookup("SUCCESS_EMOJI").unwrap_or_else(|| "✅".to_string()),
            warning_emoji: lookup("WARNING_EMOJI").unwrap_or_else(|| "⚠️".to_string()),
            error_emoji: lookup("ERROR_EMOJI").unwrap_or_else(|| "❌".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<u64>)
        .collect()
}
