//! Static command configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial descriptor, option schema and channel allow-list

use serde::{Deserialize, Serialize};
use serenity::model::application::command::CommandOptionType;
use std::collections::HashSet;

use super::cooldown::CooldownScope;
use super::permission::Permission;

/// Type of a declared command option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Number,
    Attachment,
}

impl OptionKind {
    /// Parse an option type name, defaulting to string
    pub fn parse(type_str: &str) -> Self {
        match type_str.to_lowercase().as_str() {
            "integer" => OptionKind::Integer,
            "boolean" => OptionKind::Boolean,
            "user" => OptionKind::User,
            "channel" => OptionKind::Channel,
            "role" => OptionKind::Role,
            "number" => OptionKind::Number,
            "attachment" => OptionKind::Attachment,
            _ => OptionKind::String,
        }
    }

    pub fn to_serenity(self) -> CommandOptionType {
        match self {
            OptionKind::String => CommandOptionType::String,
            OptionKind::Integer => CommandOptionType::Integer,
            OptionKind::Boolean => CommandOptionType::Boolean,
            OptionKind::User => CommandOptionType::User,
            OptionKind::Channel => CommandOptionType::Channel,
            OptionKind::Role => CommandOptionType::Role,
            OptionKind::Number => CommandOptionType::Number,
            OptionKind::Attachment => CommandOptionType::Attachment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: String,
}

/// A declared command option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionData {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
    #[serde(default)]
    pub choices: Vec<OptionChoice>,
}

impl OptionData {
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            choices: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.push(OptionChoice {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Static configuration of one command
///
/// Built once at startup with the chained setters below and never modified
/// while commands are being dispatched.
///
/// ```ignore
/// let descriptor = CommandDescriptor::new("purge", "Delete recent messages")
///     .user_permission(Permission::ManageMessages)
///     .bot_permission(Permission::ManageMessages)
///     .guild_only(true)
///     .cooldown(10, CooldownScope::Guild);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub name: String,
    pub help: String,
    pub category: Option<String>,
    pub owner_only: bool,
    pub required_role: Option<String>,
    pub user_permissions: Vec<Permission>,
    pub bot_permissions: Vec<Permission>,
    pub guild_only: bool,
    /// Register this command in a single guild instead of globally
    pub guild_id: Option<u64>,
    pub cooldown_seconds: u64,
    pub cooldown_scope: CooldownScope,
    /// Channels the command may run in, `None` allows every channel
    pub allowed_channels: Option<HashSet<u64>>,
    /// Honour `{name}` / `{-name}` tags in channel topics
    pub uses_topic_tags: bool,
    pub children: Vec<CommandDescriptor>,
    pub options: Vec<OptionData>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            category: None,
            owner_only: false,
            required_role: None,
            user_permissions: Vec::new(),
            bot_permissions: Vec::new(),
            guild_only: true,
            guild_id: None,
            cooldown_seconds: 0,
            cooldown_scope: CooldownScope::User,
            allowed_channels: None,
            uses_topic_tags: true,
            children: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn owner_only(mut self, owner_only: bool) -> Self {
        self.owner_only = owner_only;
        self
    }

    pub fn required_role(mut self, role: impl Into<String>) -> Self {
        self.required_role = Some(role.into());
        self
    }

    pub fn user_permission(mut self, permission: Permission) -> Self {
        self.user_permissions.push(permission);
        self
    }

    pub fn bot_permission(mut self, permission: Permission) -> Self {
        self.bot_permissions.push(permission);
        self
    }

    pub fn guild_only(mut self, guild_only: bool) -> Self {
        self.guild_only = guild_only;
        self
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn cooldown(mut self, seconds: u64, scope: CooldownScope) -> Self {
        self.cooldown_seconds = seconds;
        self.cooldown_scope = scope;
        self
    }

    pub fn allow_channel(mut self, channel_id: u64) -> Self {
        self.allowed_channels
            .get_or_insert_with(HashSet::new)
            .insert(channel_id);
        self
    }

    pub fn uses_topic_tags(mut self, uses_topic_tags: bool) -> Self {
        self.uses_topic_tags = uses_topic_tags;
        self
    }

    pub fn child(mut self, child: CommandDescriptor) -> Self {
        self.children.push(child);
        self
    }

    pub fn option(mut self, option: OptionData) -> Self {
        self.options.push(option);
        self
    }

    /// Whether the command may run in `channel_id`, whose topic is `topic`
    ///
    /// The allow-list is checked first. Topic tags then work per channel:
    /// `{name}` or `{category}` allows explicitly, `{-name}`, `{-category}` and
    /// `{-all}` deny.
    pub fn is_allowed(&self, channel_id: u64, topic: Option<&str>) -> bool {
        if let Some(allowed) = &self.allowed_channels {
            if !allowed.contains(&channel_id) {
                return false;
            }
        }

        if !self.uses_topic_tags {
            return true;
        }
        let topic = match topic {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };

        let name = self.name.to_lowercase();
        if topic.contains(&format!("{{{name}}}")) {
            return true;
        }
        if topic.contains(&format!("{{-{name}}}")) {
            return false;
        }

        if let Some(category) = &self.category {
            let category = category.to_lowercase();
            if topic.contains(&format!("{{{category}}}")) {
                return true;
            }
            if topic.contains(&format!("{{-{category}}}")) {
                return false;
            }
        }

        !topic.contains("{-all}")
    }
}
