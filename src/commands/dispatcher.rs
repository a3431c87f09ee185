//! # Guarded Dispatch
//!
//! Runs a slash command through its guard chain and, if every guard passes,
//! executes it. Guards run in a fixed order and the first failure ends the
//! invocation:
//!
//! 1. owner check (silent)
//! 2. channel allow-list (text channels)
//! 3. required role
//! 4. caller permissions (text channels)
//! 5. bot permissions (text channels)
//! 6. direct message rejection for guild-only commands
//! 7. cooldown (owners exempt)
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use log::{debug, warn};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::client::CommandClient;
use super::cooldown::{cooldown_key, cooldown_message};
use super::descriptor::CommandDescriptor;
use super::handler::SlashCommand;
use super::invocation::{Invocation, PermissionTarget};
use super::permission::Permission;

/// Where a missing permission was checked, as worded in replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    Channel,
    VoiceChannel,
    Server,
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PermissionScope::Channel => "channel",
            PermissionScope::VoiceChannel => "voice channel",
            PermissionScope::Server => "server",
        })
    }
}

/// Reason a guard rejected an invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardFailure {
    #[error("user is not a bot owner")]
    NotOwner,
    #[error("command is not allowed in channel {0}")]
    ChannelNotAllowed(u64),
    #[error("user lacks the `{0}` role")]
    MissingRole(String),
    #[error("user lacks {permission} in this {scope}")]
    MissingUserPermission {
        permission: Permission,
        scope: PermissionScope,
    },
    #[error("bot lacks {permission} in this {scope}")]
    MissingBotPermission {
        permission: Permission,
        scope: PermissionScope,
    },
    #[error("user is not in a voice channel")]
    NotInVoiceChannel,
    #[error("guild-only command used in direct messages")]
    DirectMessagesNotAllowed,
    #[error("on cooldown for {remaining} more seconds")]
    OnCooldown { remaining: u64, message: String },
}

impl GuardFailure {
    /// Ephemeral reply for this failure
    ///
    /// Owner check failures have no reply: non-owners should not learn that an
    /// owner-only command exists.
    pub fn user_message(&self, client: &CommandClient) -> Option<String> {
        let error = client.error();
        match self {
            GuardFailure::NotOwner => None,
            GuardFailure::ChannelNotAllowed(_) => {
                Some("That command cannot be used in this channel!".to_string())
            }
            GuardFailure::MissingRole(role) => Some(format!(
                "{error} You must have a role called `{role}` to use that!"
            )),
            GuardFailure::MissingUserPermission { permission, scope } => Some(format!(
                "{error} You must have the {permission} permission in this {scope} to use that!"
            )),
            GuardFailure::MissingBotPermission { permission, scope } => Some(format!(
                "{error} I need the {permission} permission in this {scope}!"
            )),
            GuardFailure::NotInVoiceChannel => Some(format!(
                "{error} You must be in a voice channel to use that!"
            )),
            GuardFailure::DirectMessagesNotAllowed => Some(format!(
                "{error} This command cannot be used in direct messages"
            )),
            GuardFailure::OnCooldown { message, .. } => Some(message.clone()),
        }
    }
}

/// Run every guard for `descriptor` against `invocation`
///
/// Stops at the first failure. When every guard passes and the command has a
/// cooldown, the cooldown is applied before returning.
pub fn check_guards(
    descriptor: &CommandDescriptor,
    invocation: &dyn Invocation,
    client: &CommandClient,
) -> Result<(), GuardFailure> {
    let is_owner = client.is_owner(invocation.user_id());

    if descriptor.owner_only && !is_owner {
        return Err(GuardFailure::NotOwner);
    }

    let is_text = invocation.is_text_channel();
    let channel_id = invocation.channel_id();

    if is_text
        && !descriptor.is_allowed(channel_id, invocation.channel_topic().as_deref())
    {
        return Err(GuardFailure::ChannelNotAllowed(channel_id));
    }

    if let Some(role) = &descriptor.required_role {
        let wanted = role.to_lowercase();
        let has_role = is_text
            && invocation
                .member_role_names()
                .iter()
                .any(|name| name.to_lowercase() == wanted);
        if !has_role {
            return Err(GuardFailure::MissingRole(role.clone()));
        }
    }

    if is_text {
        check_user_permissions(descriptor, invocation)?;
        check_bot_permissions(descriptor, invocation)?;
    } else if descriptor.guild_only {
        return Err(GuardFailure::DirectMessagesNotAllowed);
    }

    if descriptor.cooldown_seconds > 0 && !is_owner {
        let key = cooldown_key(&descriptor.name, descriptor.cooldown_scope, invocation);
        let cooldowns = client.cooldowns();
        let remaining = cooldowns.remaining(&key);
        if remaining > 0 {
            return Err(GuardFailure::OnCooldown {
                remaining,
                message: cooldown_message(
                    client.warning(),
                    remaining,
                    descriptor.cooldown_scope,
                    invocation,
                ),
            });
        }
        cooldowns.apply(&key, descriptor.cooldown_seconds);
    }

    Ok(())
}

fn check_user_permissions(
    descriptor: &CommandDescriptor,
    invocation: &dyn Invocation,
) -> Result<(), GuardFailure> {
    for &permission in &descriptor.user_permissions {
        let (target, scope) = if permission.is_channel() {
            (
                PermissionTarget::Channel(invocation.channel_id()),
                PermissionScope::Channel,
            )
        } else {
            (PermissionTarget::Guild, PermissionScope::Server)
        };

        if !invocation.member_has_permission(permission, target) {
            return Err(GuardFailure::MissingUserPermission { permission, scope });
        }
    }
    Ok(())
}

fn check_bot_permissions(
    descriptor: &CommandDescriptor,
    invocation: &dyn Invocation,
) -> Result<(), GuardFailure> {
    for &permission in &descriptor.bot_permissions {
        let (target, scope) = if permission.is_voice() {
            let voice_channel = invocation
                .voice_channel_id()
                .ok_or(GuardFailure::NotInVoiceChannel)?;
            (
                PermissionTarget::Channel(voice_channel),
                PermissionScope::VoiceChannel,
            )
        } else if permission.is_channel() {
            (
                PermissionTarget::Channel(invocation.channel_id()),
                PermissionScope::Channel,
            )
        } else {
            (PermissionTarget::Guild, PermissionScope::Server)
        };

        let granted = match invocation.bot_has_permission(permission, target) {
            Some(granted) => granted,
            None => {
                warn!(
                    "Could not resolve bot member in guild {:?}, treating {permission} as missing",
                    invocation.guild_id()
                );
                false
            }
        };
        if !granted {
            return Err(GuardFailure::MissingBotPermission { permission, scope });
        }
    }
    Ok(())
}

/// Dispatch one invocation of `command`
///
/// Guard failures are handled here and never surface as errors. A handler
/// error is reported to the listener and swallowed when a listener is set,
/// otherwise it is returned unchanged.
pub async fn dispatch(
    command: &dyn SlashCommand,
    invocation: &dyn Invocation,
    client: &CommandClient,
) -> Result<()> {
    let request_id = Uuid::new_v4();
    let name = &command.descriptor().name;

    debug!(
        "[{request_id}] Dispatching /{name} | User: {} | Channel: {} | Guild: {:?}",
        invocation.user_id(),
        invocation.channel_id(),
        invocation.guild_id()
    );

    if let Err(failure) = check_guards(command.descriptor(), invocation, client) {
        debug!("[{request_id}] /{name} terminated: {failure}");
        terminate(command, invocation, client, failure.user_message(client)).await;
        return Ok(());
    }

    match command.execute(invocation, client).await {
        Ok(()) => {
            debug!("[{request_id}] /{name} completed");
            if let Some(listener) = client.listener() {
                listener.on_completed(invocation, command);
            }
            Ok(())
        }
        Err(e) => match client.listener() {
            Some(listener) => {
                debug!("[{request_id}] /{name} failed, reporting to listener");
                listener.on_exception(invocation, command, &e);
                Ok(())
            }
            None => Err(e),
        },
    }
}

async fn terminate(
    command: &dyn SlashCommand,
    invocation: &dyn Invocation,
    client: &CommandClient,
    message: Option<String>,
) {
    if let Some(message) = message {
        if let Err(e) = invocation.reply_ephemeral(&message).await {
            warn!(
                "Failed to send termination reply for /{}: {e}",
                command.descriptor().name
            );
        }
    }
    if let Some(listener) = client.listener() {
        listener.on_terminated(invocation, command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cooldown::CooldownScope;
    use crate::commands::testing::{Event, MockInvocation, RecordingListener, TestCommand};
    use std::sync::Arc;
    use std::time::Duration;

    const OWNER: u64 = 1;
    const USER: u64 = 42;
    const CHANNEL: u64 = 10;
    const GUILD: u64 = 100;

    fn client_with_listener() -> (CommandClient, Arc<RecordingListener>) {
        let listener = Arc::new(RecordingListener::default());
        let client = CommandClient::new(OWNER)
            .with_co_owners(vec![2])
            .with_emojis("✅", "⚠️", "❌")
            .with_listener(listener.clone());
        (client, listener)
    }

    #[tokio::test]
    async fn test_passing_command_completes() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("ping", "Pong"));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
        assert_eq!(listener.events(), vec![Event::Completed("ping".to_string())]);
        assert!(inv.replies().is_empty());
    }

    #[tokio::test]
    async fn test_owner_only_rejects_silently() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("eval", "Eval").owner_only(true));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert!(inv.replies().is_empty());
        assert_eq!(listener.events(), vec![Event::Terminated("eval".to_string())]);
    }

    #[tokio::test]
    async fn test_owner_and_co_owner_pass_owner_check() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("eval", "Eval").owner_only(true));

        dispatch(&cmd, &MockInvocation::text(OWNER, CHANNEL, GUILD), &client)
            .await
            .unwrap();
        dispatch(&cmd, &MockInvocation::text(2, CHANNEL, GUILD), &client)
            .await
            .unwrap();

        assert_eq!(cmd.runs(), 2);
    }

    #[tokio::test]
    async fn test_channel_not_allowed() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("ping", "Pong").allow_channel(99));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(inv.replies(), vec!["That command cannot be used in this channel!"]);
        assert_eq!(listener.events(), vec![Event::Terminated("ping".to_string())]);
    }

    #[tokio::test]
    async fn test_topic_tag_blocks_command() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("ping", "Pong"));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD).with_topic("quiet please {-all}");

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(inv.replies().len(), 1);
    }

    #[tokio::test]
    async fn test_required_role_is_case_insensitive() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("lounge", "VIP lounge").required_role("VIP"));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD).with_roles(&["vip", "member"]);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
    }

    #[tokio::test]
    async fn test_missing_role() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("lounge", "VIP lounge").required_role("VIP"));
        let inv = MockInvocation::text(USER, CHANNEL, GUILD).with_roles(&["member"]);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(
            inv.replies(),
            vec!["❌ You must have a role called `VIP` to use that!"]
        );
    }

    #[tokio::test]
    async fn test_required_role_fails_in_direct_messages() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("lounge", "VIP lounge")
                .required_role("VIP")
                .guild_only(false),
        );
        let inv = MockInvocation::direct(USER, CHANNEL).with_roles(&["vip"]);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
    }

    #[tokio::test]
    async fn test_user_permission_scopes() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("purge", "Purge")
                .user_permission(Permission::ManageMessages)
                .user_permission(Permission::ManageServer),
        );

        let none = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &none, &client).await.unwrap();
        assert_eq!(
            none.replies(),
            vec!["❌ You must have the Manage Messages permission in this channel to use that!"]
        );

        let channel_only = MockInvocation::text(USER, CHANNEL, GUILD)
            .with_user_channel_permission(CHANNEL, Permission::ManageMessages);
        dispatch(&cmd, &channel_only, &client).await.unwrap();
        assert_eq!(
            channel_only.replies(),
            vec!["❌ You must have the Manage Server permission in this server to use that!"]
        );

        let both = MockInvocation::text(USER, CHANNEL, GUILD)
            .with_user_channel_permission(CHANNEL, Permission::ManageMessages)
            .with_user_guild_permission(Permission::ManageServer);
        dispatch(&cmd, &both, &client).await.unwrap();
        assert_eq!(cmd.runs(), 1);
    }

    #[tokio::test]
    async fn test_bot_permission_messages() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("ban", "Ban").bot_permission(Permission::BanMembers),
        );
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(inv.replies(), vec!["❌ I need the Ban Members permission in this server!"]);
    }

    #[tokio::test]
    async fn test_voice_permission_requires_voice_channel() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("play", "Play").bot_permission(Permission::VoiceConnect),
        );

        let outside = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &outside, &client).await.unwrap();
        assert_eq!(
            outside.replies(),
            vec!["❌ You must be in a voice channel to use that!"]
        );

        let no_perm = MockInvocation::text(USER, CHANNEL, GUILD).in_voice(55);
        dispatch(&cmd, &no_perm, &client).await.unwrap();
        assert_eq!(
            no_perm.replies(),
            vec!["❌ I need the Connect permission in this voice channel!"]
        );

        let ok = MockInvocation::text(USER, CHANNEL, GUILD)
            .in_voice(55)
            .with_bot_channel_permission(55, Permission::VoiceConnect);
        dispatch(&cmd, &ok, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
        assert_eq!(listener.events().len(), 3);
    }

    #[tokio::test]
    async fn test_unresolvable_bot_member_is_guard_failure() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("say", "Say").bot_permission(Permission::SendMessages),
        );
        let inv = MockInvocation::text(USER, CHANNEL, GUILD)
            .with_bot_guild_permission(Permission::SendMessages)
            .without_bot_member();

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(
            inv.replies(),
            vec!["❌ I need the Send Messages permission in this channel!"]
        );
    }

    #[tokio::test]
    async fn test_guild_only_rejected_in_direct_messages() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("purge", "Purge"));
        let inv = MockInvocation::direct(USER, CHANNEL);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(
            inv.replies(),
            vec!["❌ This command cannot be used in direct messages"]
        );
        assert_eq!(listener.events(), vec![Event::Terminated("purge".to_string())]);
    }

    #[tokio::test]
    async fn test_direct_messages_skip_permission_checks() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("help", "Help")
                .guild_only(false)
                .user_permission(Permission::ManageServer),
        );
        let inv = MockInvocation::direct(USER, CHANNEL);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
    }

    #[tokio::test]
    async fn test_non_text_guild_channel_rejected_when_guild_only() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("purge", "Purge").user_permission(Permission::ManageMessages),
        );
        let inv = MockInvocation::other(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(
            inv.replies(),
            vec!["❌ This command cannot be used in direct messages".to_string()]
        );
        assert_eq!(listener.events(), vec![Event::Terminated]);
    }

    #[tokio::test]
    async fn test_non_text_guild_channel_runs_when_not_guild_only() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("purge", "Purge")
                .guild_only(false)
                .allow_channel(99)
                .user_permission(Permission::ManageMessages),
        );
        let inv = MockInvocation::other(USER, CHANNEL, GUILD);

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_window() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("daily", "Daily").cooldown(10, CooldownScope::UserGuild),
        );

        let first = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &first, &client).await.unwrap();
        assert_eq!(cmd.runs(), 1);
        assert_eq!(client.cooldowns().remaining("daily|U:42|G:100"), 10);

        tokio::time::advance(Duration::from_secs(3)).await;
        let second = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &second, &client).await.unwrap();
        assert_eq!(cmd.runs(), 1);
        assert_eq!(
            second.replies(),
            vec!["⚠️ That command is on cooldown for 7 more seconds in this server!"]
        );

        tokio::time::advance(Duration::from_secs(8)).await;
        let third = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &third, &client).await.unwrap();
        assert_eq!(cmd.runs(), 2);

        assert_eq!(
            listener.events(),
            vec![
                Event::Completed("daily".to_string()),
                Event::Terminated("daily".to_string()),
                Event::Completed("daily".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_cooldown_does_not_panic() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("once", "Once").cooldown(u64::MAX, CooldownScope::Global),
        );

        dispatch(&cmd, &MockInvocation::text(USER, CHANNEL, GUILD), &client)
            .await
            .unwrap();
        let again = MockInvocation::text(USER, CHANNEL, GUILD);
        dispatch(&cmd, &again, &client).await.unwrap();

        assert_eq!(cmd.runs(), 1);
        assert_eq!(again.replies().len(), 1);
        assert!(again.replies()[0].ends_with("globally!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_falls_back_in_direct_messages() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("daily", "Daily")
                .guild_only(false)
                .cooldown(10, CooldownScope::UserGuild),
        );

        dispatch(&cmd, &MockInvocation::direct(USER, CHANNEL), &client)
            .await
            .unwrap();
        assert_eq!(client.cooldowns().remaining("daily|U:42|C:10"), 10);

        let again = MockInvocation::direct(USER, CHANNEL);
        dispatch(&cmd, &again, &client).await.unwrap();
        assert_eq!(
            again.replies(),
            vec!["⚠️ That command is on cooldown for 10 more seconds in this channel!"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_owner_skips_cooldown() {
        let (client, _) = client_with_listener();
        let cmd = TestCommand::new(
            CommandDescriptor::new("daily", "Daily").cooldown(60, CooldownScope::Global),
        );

        for _ in 0..3 {
            dispatch(&cmd, &MockInvocation::text(OWNER, CHANNEL, GUILD), &client)
                .await
                .unwrap();
        }

        assert_eq!(cmd.runs(), 3);
        assert_eq!(client.cooldowns().remaining("daily|Global"), 0);
    }

    #[tokio::test]
    async fn test_handler_error_reported_to_listener() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::failing(CommandDescriptor::new("boom", "Boom"), "kaboom");
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        let result = dispatch(&cmd, &inv, &client).await;

        assert!(result.is_ok());
        assert_eq!(
            listener.events(),
            vec![Event::Exception("boom".to_string(), "kaboom".to_string())]
        );
    }

    #[tokio::test]
    async fn test_handler_error_propagates_without_listener() {
        let client = CommandClient::new(OWNER);
        let cmd = TestCommand::failing(CommandDescriptor::new("boom", "Boom"), "kaboom");
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        let err = dispatch(&cmd, &inv, &client).await.unwrap_err();

        assert_eq!(err.to_string(), "kaboom");
        assert_eq!(cmd.runs(), 1);
    }

    #[tokio::test]
    async fn test_failed_reply_still_terminates() {
        let (client, listener) = client_with_listener();
        let cmd = TestCommand::new(CommandDescriptor::new("purge", "Purge"));
        let inv = MockInvocation::direct(USER, CHANNEL).with_failing_replies();

        dispatch(&cmd, &inv, &client).await.unwrap();

        assert_eq!(cmd.runs(), 0);
        assert_eq!(listener.events(), vec![Event::Terminated("purge".to_string())]);
    }

    #[test]
    fn test_guard_order_owner_before_channel() {
        let client = CommandClient::new(OWNER);
        let descriptor = CommandDescriptor::new("eval", "Eval")
            .owner_only(true)
            .allow_channel(99);
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        assert_eq!(
            check_guards(&descriptor, &inv, &client),
            Err(GuardFailure::NotOwner)
        );
    }

    #[test]
    fn test_guard_order_caller_before_bot_permissions() {
        let client = CommandClient::new(OWNER);
        let descriptor = CommandDescriptor::new("kick", "Kick")
            .user_permission(Permission::KickMembers)
            .bot_permission(Permission::KickMembers);
        let inv = MockInvocation::text(USER, CHANNEL, GUILD);

        assert_eq!(
            check_guards(&descriptor, &inv, &client),
            Err(GuardFailure::MissingUserPermission {
                permission: Permission::KickMembers,
                scope: PermissionScope::Server,
            })
        );
    }
}
