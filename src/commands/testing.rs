//! Test doubles for command dispatch

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::client::CommandClient;
use super::descriptor::CommandDescriptor;
use super::handler::SlashCommand;
use super::invocation::{ChannelKind, Invocation, PermissionTarget};
use super::listener::CommandListener;
use super::permission::Permission;

#[derive(Default)]
struct PermissionSet {
    guild: HashSet<Permission>,
    channels: HashMap<u64, HashSet<Permission>>,
}

impl PermissionSet {
    fn has(&self, permission: Permission, target: PermissionTarget) -> bool {
        if self.guild.contains(&permission) {
            return true;
        }
        match target {
            PermissionTarget::Guild => false,
            PermissionTarget::Channel(id) => self
                .channels
                .get(&id)
                .is_some_and(|perms| perms.contains(&permission)),
        }
    }
}

/// In-memory invocation recording its ephemeral replies
pub struct MockInvocation {
    user_id: u64,
    channel_id: u64,
    kind: ChannelKind,
    guild_id: Option<u64>,
    shard_id: u64,
    topic: Option<String>,
    command: (String, Option<String>),
    options: HashMap<String, Value>,
    roles: Vec<String>,
    user_perms: PermissionSet,
    bot_perms: PermissionSet,
    bot_present: bool,
    voice_channel: Option<u64>,
    fail_replies: bool,
    replies: Mutex<Vec<String>>,
    public_replies: Mutex<Vec<String>>,
}

impl MockInvocation {
    fn base(user_id: u64, channel_id: u64, kind: ChannelKind, guild_id: Option<u64>) -> Self {
        Self {
            user_id,
            channel_id,
            kind,
            guild_id,
            shard_id: 0,
            topic: None,
            command: ("test".to_string(), None),
            options: HashMap::new(),
            roles: Vec::new(),
            user_perms: PermissionSet::default(),
            bot_perms: PermissionSet::default(),
            bot_present: true,
            voice_channel: None,
            fail_replies: false,
            replies: Mutex::new(Vec::new()),
            public_replies: Mutex::new(Vec::new()),
        }
    }

    /// Invocation from a guild text channel
    pub fn text(user_id: u64, channel_id: u64, guild_id: u64) -> Self {
        Self::base(user_id, channel_id, ChannelKind::Text, Some(guild_id))
    }

    /// Invocation from a direct message
    pub fn direct(user_id: u64, channel_id: u64) -> Self {
        Self::base(user_id, channel_id, ChannelKind::Private, None)
    }

    /// Invocation from a non-text guild channel such as a thread
    pub fn other(user_id: u64, channel_id: u64, guild_id: u64) -> Self {
        Self::base(user_id, channel_id, ChannelKind::Other, Some(guild_id))
    }

    pub fn with_shard(mut self, shard_id: u64) -> Self {
        self.shard_id = shard_id;
        self
    }

    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_string());
        self
    }

    pub fn with_command(mut self, name: &str, subcommand: Option<&str>) -> Self {
        self.command = (name.to_string(), subcommand.map(|s| s.to_string()));
        self
    }

    pub fn with_option(mut self, name: &str, value: Value) -> Self {
        self.options.insert(name.to_string(), value);
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_user_guild_permission(mut self, permission: Permission) -> Self {
        self.user_perms.guild.insert(permission);
        self
    }

    pub fn with_user_channel_permission(mut self, channel_id: u64, permission: Permission) -> Self {
        self.user_perms
            .channels
            .entry(channel_id)
            .or_default()
            .insert(permission);
        self
    }

    pub fn with_bot_guild_permission(mut self, permission: Permission) -> Self {
        self.bot_perms.guild.insert(permission);
        self
    }

    pub fn with_bot_channel_permission(mut self, channel_id: u64, permission: Permission) -> Self {
        self.bot_perms
            .channels
            .entry(channel_id)
            .or_default()
            .insert(permission);
        self
    }

    pub fn without_bot_member(mut self) -> Self {
        self.bot_present = false;
        self
    }

    pub fn in_voice(mut self, channel_id: u64) -> Self {
        self.voice_channel = Some(channel_id);
        self
    }

    pub fn with_failing_replies(mut self) -> Self {
        self.fail_replies = true;
        self
    }

    /// Ephemeral replies sent so far
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn public_replies(&self) -> Vec<String> {
        self.public_replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invocation for MockInvocation {
    fn user_id(&self) -> u64 {
        self.user_id
    }

    fn channel_id(&self) -> u64 {
        self.channel_id
    }

    fn channel_kind(&self) -> ChannelKind {
        self.kind
    }

    fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    fn shard_id(&self) -> u64 {
        self.shard_id
    }

    fn channel_topic(&self) -> Option<String> {
        self.topic.clone()
    }

    fn command_path(&self) -> (String, Option<String>) {
        self.command.clone()
    }

    fn option_value(&self, name: &str) -> Option<Value> {
        self.options.get(name).cloned()
    }

    fn member_role_names(&self) -> Vec<String> {
        self.roles.clone()
    }

    fn member_has_permission(&self, permission: Permission, target: PermissionTarget) -> bool {
        self.user_perms.has(permission, target)
    }

    fn bot_has_permission(
        &self,
        permission: Permission,
        target: PermissionTarget,
    ) -> Option<bool> {
        self.bot_present
            .then(|| self.bot_perms.has(permission, target))
    }

    fn voice_channel_id(&self) -> Option<u64> {
        self.voice_channel
    }

    async fn reply(&self, content: &str) -> Result<()> {
        if self.fail_replies {
            return Err(anyhow!("interaction already acknowledged"));
        }
        self.public_replies.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<()> {
        if self.fail_replies {
            return Err(anyhow!("interaction already acknowledged"));
        }
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

/// Listener outcome, tagged with the command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Terminated(String),
    Completed(String),
    Exception(String, String),
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Event>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl CommandListener for RecordingListener {
    fn on_terminated(&self, _invocation: &dyn Invocation, command: &dyn SlashCommand) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Terminated(command.descriptor().name.clone()));
    }

    fn on_completed(&self, _invocation: &dyn Invocation, command: &dyn SlashCommand) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Completed(command.descriptor().name.clone()));
    }

    fn on_exception(
        &self,
        _invocation: &dyn Invocation,
        command: &dyn SlashCommand,
        error: &anyhow::Error,
    ) {
        self.events.lock().unwrap().push(Event::Exception(
            command.descriptor().name.clone(),
            error.to_string(),
        ));
    }
}

/// Command counting its executions, optionally failing every time
pub struct TestCommand {
    descriptor: CommandDescriptor,
    failure: Option<String>,
    runs: AtomicUsize,
}

impl TestCommand {
    pub fn new(descriptor: CommandDescriptor) -> Self {
        Self {
            descriptor,
            failure: None,
            runs: AtomicUsize::new(0),
        }
    }

    pub fn failing(descriptor: CommandDescriptor, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(descriptor)
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlashCommand for TestCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    async fn execute(&self, _invocation: &dyn Invocation, _client: &CommandClient) -> Result<()> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}
