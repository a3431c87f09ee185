//! Command registry
//!
//! - **Version**: 2.1.0
//! - **Since**: 3.38.0
//!
//! ## Changelog
//! - 2.1.0: Warn when declared and routed subcommands differ
//! - 2.0.0: Register commands by descriptor name, route subcommands as `parent child`
//! - 1.0.0: Initial implementation for handler dispatch

use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use super::data::{build_command_data, CommandData};
use super::descriptor::CommandDescriptor;
use super::handler::SlashCommand;

/// Registry mapping command names to commands
///
/// Top-level commands are stored under their name and their children under
/// `"<parent> <child>"`, so an invoked subcommand resolves straight to the child
/// and runs through the child's own guards.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(PingCommand::new()));
///
/// if let Some(command) = registry.resolve("ping", None) {
///     dispatch(command.as_ref(), &invocation, &client).await?;
/// }
/// ```
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn SlashCommand>>,
    top_level: Vec<String>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command and its children
    ///
    /// Registering a name twice replaces the earlier command.
    pub fn register(&mut self, command: Arc<dyn SlashCommand>) {
        let name = command.descriptor().name.clone();
        let children = command.children();

        if !children_agree(command.descriptor(), &children) {
            warn!(
                "/{name} declares subcommands {:?} but routes {:?}",
                declared_child_names(command.descriptor()),
                routed_child_names(&children)
            );
        }

        for child in children {
            let key = format!("{name} {}", child.descriptor().name);
            self.commands.insert(key, child);
        }

        if !self.top_level.contains(&name) {
            self.top_level.push(name.clone());
        }
        self.commands.insert(name, command);
    }

    /// Get a command by full name (`"ping"` or `"music play"`)
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommand>> {
        self.commands.get(name).cloned()
    }

    /// Resolve an invoked command path to the command that should run
    ///
    /// Unknown subcommands fall back to the parent.
    pub fn resolve(&self, name: &str, subcommand: Option<&str>) -> Option<Arc<dyn SlashCommand>> {
        subcommand
            .and_then(|sub| self.get(&format!("{name} {sub}")))
            .or_else(|| self.get(name))
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Number of top-level commands
    pub fn len(&self) -> usize {
        self.top_level.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    /// Top-level commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = Arc<dyn SlashCommand>> + '_ {
        self.top_level
            .iter()
            .filter_map(|name| self.commands.get(name).cloned())
    }

    /// Registration metadata for every top-level command
    pub fn command_data(&self) -> Vec<CommandData> {
        self.commands()
            .map(|command| build_command_data(command.descriptor()))
            .collect()
    }
}

/// Whether the subcommands sent to Discord match the ones that can be routed
fn children_agree(descriptor: &CommandDescriptor, children: &[Arc<dyn SlashCommand>]) -> bool {
    declared_child_names(descriptor) == routed_child_names(children)
}

fn declared_child_names(descriptor: &CommandDescriptor) -> Vec<&str> {
    let mut names: Vec<&str> = descriptor.children.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    names
}

fn routed_child_names(children: &[Arc<dyn SlashCommand>]) -> Vec<String> {
    let mut names: Vec<String> = children
        .iter()
        .map(|c| c.descriptor().name.clone())
        .collect();
    names.sort_unstable();
    names
}
