//! Admin commands: /announce, /vip, /shard
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Permission and role checks moved into command descriptors
//! - 1.0.0: Extracted from command_handler.rs

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;

use crate::commands::client::CommandClient;
use crate::commands::cooldown::CooldownScope;
use crate::commands::descriptor::{CommandDescriptor, OptionData, OptionKind};
use crate::commands::handler::SlashCommand;
use crate::commands::invocation::Invocation;
use crate::commands::permission::Permission;

/// /announce - repeat a message publicly, once per server every 30 seconds
pub struct AnnounceCommand {
    descriptor: CommandDescriptor,
}

impl AnnounceCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("announce", "Post an announcement in this channel")
                .category("admin")
                .user_permission(Permission::ManageServer)
                .bot_permission(Permission::SendMessages)
                .cooldown(30, CooldownScope::Guild)
                .option(
                    OptionData::new(OptionKind::String, "message", "What to announce")
                        .required(true),
                ),
        }
    }
}

impl Default for AnnounceCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for AnnounceCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        let message = invocation
            .string_option("message")
            .ok_or_else(|| anyhow!("Missing message option"))?;

        invocation.reply(&format!("📢 {message}")).await?;
        info!(
            "Announcement posted by {} in channel {}",
            invocation.user_id(),
            invocation.channel_id()
        );
        Ok(())
    }
}

/// /vip - members holding the VIP role only
pub struct VipCommand {
    descriptor: CommandDescriptor,
}

impl VipCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("vip", "A warm welcome for VIP members")
                .category("admin")
                .required_role("VIP"),
        }
    }
}

impl Default for VipCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for VipCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, client: &CommandClient) -> Result<()> {
        invocation
            .reply_ephemeral(&format!("{} Welcome to the VIP lounge!", client.success()))
            .await
    }
}

/// /shard - owner diagnostics
pub struct ShardCommand {
    descriptor: CommandDescriptor,
}

impl ShardCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("shard", "Show which shard handled this command")
                .category("owner")
                .owner_only(true)
                .guild_only(false),
        }
    }
}

impl Default for ShardCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for ShardCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        invocation
            .reply_ephemeral(&format!("Shard {}", invocation.shard_id()))
            .await
    }
}
