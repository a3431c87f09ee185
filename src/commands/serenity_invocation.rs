//! Serenity-backed invocation
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Guild permissions from role union, threads and news channels count as text
//! - 1.0.0: Initial cache-backed implementation

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::{Channel, ChannelType, GuildChannel};
use serenity::model::guild::{Guild, Member};
use serenity::model::id::{ChannelId, RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;

use super::invocation::{ChannelKind, Invocation, PermissionTarget};
use super::permission::Permission;

/// An [`ApplicationCommandInteraction`] viewed as an [`Invocation`]
///
/// The guild is snapshotted from the cache once, when the invocation is built, so
/// every guard sees the same roles, permissions and voice states.
pub struct SerenityInvocation<'a> {
    ctx: &'a Context,
    command: &'a ApplicationCommandInteraction,
    guild: Option<Guild>,
    bot_id: UserId,
}

impl<'a> SerenityInvocation<'a> {
    pub fn new(ctx: &'a Context, command: &'a ApplicationCommandInteraction) -> Self {
        let guild = command.guild_id.and_then(|id| ctx.cache.guild(id));
        Self {
            ctx,
            command,
            guild,
            bot_id: ctx.cache.current_user_id(),
        }
    }

    /// The raw interaction, for handlers that need more than the trait offers
    pub fn interaction(&self) -> &ApplicationCommandInteraction {
        self.command
    }

    pub fn context(&self) -> &Context {
        self.ctx
    }

    fn guild_channel(&self, channel_id: u64) -> Option<&GuildChannel> {
        let guild = self.guild.as_ref()?;
        let id = ChannelId(channel_id);
        match guild.channels.get(&id) {
            Some(Channel::Guild(gc)) => Some(gc),
            Some(_) => None,
            None => guild.threads.iter().find(|thread| thread.id == id),
        }
    }

    /// The channel whose overwrites govern `channel_id`: threads use their parent
    fn permission_channel(&self, channel_id: u64) -> Option<&GuildChannel> {
        let channel = self.guild_channel(channel_id)?;
        if is_thread(channel.kind) {
            let parent = channel.parent_id?;
            return self.guild_channel(parent.0);
        }
        Some(channel)
    }

    fn subcommand(&self) -> Option<&CommandDataOption> {
        self.command
            .data
            .options
            .first()
            .filter(|opt| opt.kind == CommandOptionType::SubCommand)
    }

    fn options(&self) -> &[CommandDataOption] {
        match self.subcommand() {
            Some(sub) => &sub.options,
            None => &self.command.data.options,
        }
    }

    async fn respond(&self, content: &str, ephemeral: bool) -> Result<()> {
        self.command
            .create_interaction_response(&self.ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| {
                        message.content(content).ephemeral(ephemeral)
                    })
            })
            .await?;
        Ok(())
    }

    fn permissions_of(&self, member: &Member, target: PermissionTarget) -> Option<Permissions> {
        let guild = self.guild.as_ref()?;
        match target {
            PermissionTarget::Guild => {
                let everyone = guild
                    .roles
                    .get(&RoleId(guild.id.0))
                    .map_or_else(Permissions::empty, |role| role.permissions);
                let roles = member
                    .roles
                    .iter()
                    .filter_map(|id| guild.roles.get(id))
                    .map(|role| role.permissions);
                Some(guild_permissions(
                    guild.owner_id == member.user.id,
                    everyone,
                    roles,
                ))
            }
            PermissionTarget::Channel(id) => {
                let channel = self.permission_channel(id)?;
                guild.user_permissions_in(channel, member).ok()
            }
        }
    }
}

/// Server-wide permissions: `@everyone` plus every held role
///
/// The owner and administrators hold everything.
pub(crate) fn guild_permissions<I>(is_owner: bool, everyone: Permissions, roles: I) -> Permissions
where
    I: IntoIterator<Item = Permissions>,
{
    if is_owner {
        return Permissions::all();
    }
    let perms = roles.into_iter().fold(everyone, |acc, role| acc | role);
    if perms.contains(Permissions::ADMINISTRATOR) {
        Permissions::all()
    } else {
        perms
    }
}

/// Classify the invoking channel for the guards
///
/// Anything a member can type a slash command into inside a guild counts as
/// text. Channels missing from the cache get the full text-channel checks.
pub(crate) fn channel_kind_for(kind: Option<ChannelType>, in_guild: bool) -> ChannelKind {
    if !in_guild {
        return ChannelKind::Private;
    }
    match kind {
        None
        | Some(
            ChannelType::Text
            | ChannelType::News
            | ChannelType::NewsThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::Voice
            | ChannelType::Stage,
        ) => ChannelKind::Text,
        Some(_) => ChannelKind::Other,
    }
}

fn is_thread(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::NewsThread | ChannelType::PublicThread | ChannelType::PrivateThread
    )
}

#[async_trait]
impl<'a> Invocation for SerenityInvocation<'a> {
    fn user_id(&self) -> u64 {
        self.command.user.id.0
    }

    fn channel_id(&self) -> u64 {
        self.command.channel_id.0
    }

    fn channel_kind(&self) -> ChannelKind {
        channel_kind_for(
            self.guild_channel(self.channel_id()).map(|gc| gc.kind),
            self.command.guild_id.is_some(),
        )
    }

    fn guild_id(&self) -> Option<u64> {
        self.command.guild_id.map(|id| id.0)
    }

    fn shard_id(&self) -> u64 {
        self.ctx.shard_id
    }

    fn channel_topic(&self) -> Option<String> {
        self.guild_channel(self.channel_id())
            .and_then(|gc| gc.topic.clone())
    }

    fn command_path(&self) -> (String, Option<String>) {
        (
            self.command.data.name.clone(),
            self.subcommand().map(|sub| sub.name.clone()),
        )
    }

    fn option_value(&self, name: &str) -> Option<Value> {
        self.options()
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.clone())
    }

    fn member_role_names(&self) -> Vec<String> {
        let (Some(guild), Some(member)) = (self.guild.as_ref(), self.command.member.as_ref()) else {
            return Vec::new();
        };
        member
            .roles
            .iter()
            .filter_map(|id| guild.roles.get(id).map(|role| role.name.clone()))
            .collect()
    }

    fn member_has_permission(&self, permission: Permission, target: PermissionTarget) -> bool {
        let Some(member) = self.command.member.as_ref() else {
            return false;
        };

        // Discord resolves the invoker's permissions in the invoking channel for us
        if target == PermissionTarget::Channel(self.channel_id()) {
            if let Some(perms) = member.permissions {
                return permission.granted_by(perms);
            }
        }

        self.permissions_of(member, target)
            .is_some_and(|perms| permission.granted_by(perms))
    }

    fn bot_has_permission(
        &self,
        permission: Permission,
        target: PermissionTarget,
    ) -> Option<bool> {
        let bot_member = self.guild.as_ref()?.members.get(&self.bot_id)?;
        Some(
            self.permissions_of(bot_member, target)
                .is_some_and(|perms| permission.granted_by(perms)),
        )
    }

    fn voice_channel_id(&self) -> Option<u64> {
        self.guild
            .as_ref()?
            .voice_states
            .get(&self.command.user.id)
            .and_then(|state| state.channel_id)
            .map(|id| id.0)
    }

    async fn reply(&self, content: &str) -> Result<()> {
        self.respond(content, false).await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<()> {
        self.respond(content, true).await
    }
}
