// Core layer - configuration
pub mod core;

// Command layer - descriptors, guards and dispatch
pub mod commands;

pub use core::Config;

pub use commands::{
    build_command_data, check_guards, dispatch, register_commands, CommandClient, CommandData,
    CommandDescriptor, CommandListener, CommandRegistry, CooldownScope, CooldownStore,
    GuardFailure, InMemoryCooldownStore, Invocation, LoggingListener, Permission,
    SerenityInvocation, SlashCommand,
};
