//! # Command System
//!
//! Guarded slash (/) command dispatch for Discord interactions.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Guard chain dispatcher, descriptors, cooldown scopes and listeners
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)
//! - 2.0.0: Remove bang commands, slash-only command system
//! - 1.0.0: Initial reorganization with modular command structure

pub mod client;
pub mod cooldown;
pub mod data;
pub mod descriptor;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod invocation;
pub mod listener;
pub mod permission;
pub mod registration;
pub mod registry;
pub mod serenity_invocation;

#[cfg(test)]
pub(crate) mod testing;

pub use client::CommandClient;
pub use cooldown::{cooldown_key, cooldown_message, CooldownScope, CooldownStore, InMemoryCooldownStore};
pub use data::{build_command_data, CommandData, SubcommandData};
pub use descriptor::{CommandDescriptor, OptionChoice, OptionData, OptionKind};
pub use dispatcher::{check_guards, dispatch, GuardFailure, PermissionScope};
pub use handler::SlashCommand;
pub use invocation::{ChannelKind, Invocation, PermissionTarget};
pub use listener::{CommandListener, LoggingListener};
pub use permission::Permission;
pub use registration::{plan_registration, register_commands, RegistrationPlan};
pub use registry::CommandRegistry;
pub use serenity_invocation::SerenityInvocation;
