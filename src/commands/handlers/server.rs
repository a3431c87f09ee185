//! Server commands: /server info, /server topic

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::client::CommandClient;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::handler::SlashCommand;
use crate::commands::invocation::Invocation;
use crate::commands::permission::Permission;

/// /server - parent of the server subcommands
pub struct ServerCommand {
    descriptor: CommandDescriptor,
    children: Vec<Arc<dyn SlashCommand>>,
}

impl ServerCommand {
    pub fn new() -> Self {
        let children: Vec<Arc<dyn SlashCommand>> =
            vec![Arc::new(ServerInfoCommand::new()), Arc::new(ServerTopicCommand::new())];

        let descriptor = children.iter().fold(
            CommandDescriptor::new("server", "Information about this server").category("server"),
            |descriptor, child| descriptor.child(child.descriptor().clone()),
        );

        Self {
            descriptor,
            children,
        }
    }
}

impl Default for ServerCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for ServerCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn children(&self) -> Vec<Arc<dyn SlashCommand>> {
        self.children.clone()
    }

    async fn execute(&self, invocation: &dyn Invocation, client: &CommandClient) -> Result<()> {
        invocation
            .reply_ephemeral(&format!(
                "{} Use `/server info` or `/server topic`",
                client.warning()
            ))
            .await
    }
}

/// /server info
pub struct ServerInfoCommand {
    descriptor: CommandDescriptor,
}

impl ServerInfoCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("info", "Show server and channel ids")
                .category("server"),
        }
    }
}

#[async_trait]
impl SlashCommand for ServerInfoCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        let guild = invocation
            .guild_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());
        invocation
            .reply(&format!(
                "**Server:** {guild}\n**Channel:** {}\n**Shard:** {}",
                invocation.channel_id(),
                invocation.shard_id()
            ))
            .await
    }
}

/// /server topic - requires Manage Channels since topics carry command tags
pub struct ServerTopicCommand {
    descriptor: CommandDescriptor,
}

impl ServerTopicCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new("topic", "Show this channel's topic and command tags")
                .category("server")
                .user_permission(Permission::ManageChannels),
        }
    }
}

#[async_trait]
impl SlashCommand for ServerTopicCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        let response = match invocation.channel_topic() {
            Some(topic) if !topic.is_empty() => format!("**Topic:** {topic}"),
            _ => "This channel has no topic.".to_string(),
        };
        invocation.reply_ephemeral(&response).await
    }
}
