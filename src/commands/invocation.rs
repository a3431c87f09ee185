//! Invocation abstraction for a single slash command attempt
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial trait, option helpers moved here from the slash module

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::permission::Permission;

/// Kind of channel a command was invoked from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// A regular guild text channel
    Text,
    /// A direct message with the bot
    Private,
    /// Anything else (threads, voice text chat, news channels...)
    Other,
}

/// Where a permission should be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionTarget {
    /// Guild-wide permissions from roles only
    Guild,
    /// Permissions in a specific channel, including overwrites
    Channel(u64),
}

/// One user-triggered attempt to run a command
///
/// Implementations are read-only views over whatever the transport delivered.
/// The dispatcher never mutates an invocation; the only side effect it asks for
/// is [`Invocation::reply_ephemeral`] when a guard rejects the attempt.
#[async_trait]
pub trait Invocation: Send + Sync {
    fn user_id(&self) -> u64;

    fn channel_id(&self) -> u64;

    fn channel_kind(&self) -> ChannelKind;

    /// Guild the command was invoked in, `None` in direct messages
    fn guild_id(&self) -> Option<u64>;

    fn shard_id(&self) -> u64;

    /// Topic of the invoking channel, if it has one
    fn channel_topic(&self) -> Option<String> {
        None
    }

    /// Invoked command name, followed by the subcommand name if any
    fn command_path(&self) -> (String, Option<String>);

    /// Raw value of a named option
    fn option_value(&self, name: &str) -> Option<Value>;

    /// Names of the roles held by the invoking member (empty outside guilds)
    fn member_role_names(&self) -> Vec<String>;

    /// Whether the invoking member holds `permission` at `target`
    fn member_has_permission(&self, permission: Permission, target: PermissionTarget) -> bool;

    /// Whether the bot's own member holds `permission` at `target`
    ///
    /// Returns `None` when the bot member cannot be resolved for this guild.
    fn bot_has_permission(&self, permission: Permission, target: PermissionTarget)
        -> Option<bool>;

    /// Voice channel the invoking member is currently connected to
    fn voice_channel_id(&self) -> Option<u64>;

    /// Send a reply everyone in the channel can see
    async fn reply(&self, content: &str) -> Result<()>;

    /// Send a reply only the invoking user can see
    async fn reply_ephemeral(&self, content: &str) -> Result<()>;

    fn is_text_channel(&self) -> bool {
        self.channel_kind() == ChannelKind::Text
    }

    /// Get a string option
    fn string_option(&self, name: &str) -> Option<String> {
        self.option_value(name)
            .and_then(|val| val.as_str().map(|s| s.to_string()))
    }

    /// Get an integer option
    fn integer_option(&self, name: &str) -> Option<i64> {
        self.option_value(name).and_then(|val| val.as_i64())
    }

    /// Get a boolean option
    fn bool_option(&self, name: &str) -> Option<bool> {
        self.option_value(name).and_then(|val| val.as_bool())
    }

    /// Get a snowflake option (user, channel, role), sent as a string by Discord
    fn id_option(&self, name: &str) -> Option<u64> {
        self.option_value(name)
            .and_then(|val| val.as_str().and_then(|s| s.parse().ok()))
    }
}
