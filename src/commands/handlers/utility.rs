//! Utility commands
//!
//! Handles: ping, uptime, help
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Ported to guarded slash commands
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::time::Instant;

use crate::commands::client::CommandClient;
use crate::commands::cooldown::CooldownScope;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::handler::SlashCommand;
use crate::commands::invocation::Invocation;
use crate::commands::registry::CommandRegistry;

/// /ping - responsiveness check, rate limited per user
pub struct PingCommand {
    descriptor: CommandDescriptor,
}

impl PingCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("ping", "Test bot responsiveness")
                .category("utility")
                .guild_only(false)
                .cooldown(5, CooldownScope::User),
        }
    }
}

impl Default for PingCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for PingCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        invocation.reply("Pong!").await?;
        info!("Ping command completed for user {}", invocation.user_id());
        Ok(())
    }
}

/// /uptime - time since the bot started
pub struct UptimeCommand {
    descriptor: CommandDescriptor,
    start_time: Instant,
}

impl UptimeCommand {
    pub fn new(start_time: Instant) -> Self {
        Self {
            descriptor: CommandDescriptor::new("uptime", "Show how long the bot has been running")
                .category("utility")
                .guild_only(false),
            start_time,
        }
    }
}

#[async_trait]
impl SlashCommand for UptimeCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        let uptime = format_duration(self.start_time.elapsed().as_secs());
        invocation.reply(&format!("⏱️ Uptime: {uptime}")).await
    }
}

/// Format seconds as `1d 2h 3m 4s`, skipping leading zero units
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// /help - lists registered commands
///
/// The listing is captured when the command is built, so build it last.
pub struct HelpCommand {
    descriptor: CommandDescriptor,
    help_text: String,
}

impl HelpCommand {
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        let mut help_text = String::from("**Available Slash Commands:**\n`/help` - Show this help message\n");
        for command in registry.commands() {
            let d = command.descriptor();
            if d.owner_only {
                continue;
            }
            help_text.push_str(&format!("`/{}` - {}\n", d.name, d.help));
            for child in &d.children {
                help_text.push_str(&format!("`/{} {}` - {}\n", d.name, child.name, child.help));
            }
        }

        Self {
            descriptor: CommandDescriptor::new("help", "Show this help message")
                .category("utility")
                .guild_only(false),
            help_text,
        }
    }
}

#[async_trait]
impl SlashCommand for HelpCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        invocation.reply_ephemeral(self.help_text.trim_end()).await
    }
}
