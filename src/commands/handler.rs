//! Slash command trait
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Commands expose a descriptor and receive the invocation and client explicitly
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::client::CommandClient;
use super::descriptor::CommandDescriptor;
use super::invocation::Invocation;

/// Trait for slash commands
///
/// Any type exposing a [`CommandDescriptor`] and an `execute` body is a command.
/// Guards described by the descriptor run in the dispatcher before `execute`
/// is ever called.
///
/// # Example
///
/// ```ignore
/// pub struct PingCommand {
///     descriptor: CommandDescriptor,
/// }
///
/// #[async_trait]
/// impl SlashCommand for PingCommand {
///     fn descriptor(&self) -> &CommandDescriptor {
///         &self.descriptor
///     }
///
///     async fn execute(&self, invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
///         invocation.reply_ephemeral("Pong!").await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Static configuration for this command
    fn descriptor(&self) -> &CommandDescriptor;

    /// Subcommands, invoked as `/<parent> <child>`
    fn children(&self) -> Vec<Arc<dyn SlashCommand>> {
        Vec::new()
    }

    /// Command body, only called once every guard has passed
    async fn execute(&self, invocation: &dyn Invocation, client: &CommandClient) -> Result<()>;
}
