//! Built-in slash commands
//!
//! - **Version**: 2.0.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.0.0: Commands implement SlashCommand and carry their own guards
//! - 1.0.0: Initial extraction from command_handler.rs

pub mod admin;
pub mod server;
pub mod utility;

use std::sync::Arc;
use std::time::Instant;

use super::registry::CommandRegistry;

pub use admin::{AnnounceCommand, ShardCommand, VipCommand};
pub use server::{ServerCommand, ServerInfoCommand, ServerTopicCommand};
pub use utility::{HelpCommand, PingCommand, UptimeCommand};

/// Registry with every built-in command, /help last so it can list the rest
pub fn builtin_registry(start_time: Instant) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(PingCommand::new()));
    registry.register(Arc::new(UptimeCommand::new(start_time)));
    registry.register(Arc::new(ServerCommand::new()));
    registry.register(Arc::new(AnnounceCommand::new()));
    registry.register(Arc::new(VipCommand::new()));
    registry.register(Arc::new(ShardCommand::new()));

    let help = HelpCommand::from_registry(&registry);
    registry.register(Arc::new(help));
    registry
}
