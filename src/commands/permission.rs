//! Discord permissions understood by the guard chain
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial permission table with channel and voice scoping

use serenity::model::permissions::Permissions;
use std::fmt;

/// A single Discord permission a command can require from the caller or the bot
///
/// Unlike serenity's [`Permissions`] bitflags, each variant knows whether it can be
/// overridden per channel and whether it only makes sense in a voice channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    CreateInstantInvite,
    KickMembers,
    BanMembers,
    Administrator,
    ManageChannels,
    ManageServer,
    AddReactions,
    ViewAuditLog,
    PrioritySpeaker,
    ViewChannel,
    SendMessages,
    SendTtsMessages,
    ManageMessages,
    EmbedLinks,
    AttachFiles,
    ReadMessageHistory,
    MentionEveryone,
    UseExternalEmojis,
    ViewGuildInsights,
    VoiceStream,
    VoiceConnect,
    VoiceSpeak,
    VoiceMuteOthers,
    VoiceDeafenOthers,
    VoiceMoveOthers,
    VoiceUseVad,
    ChangeNickname,
    ManageNicknames,
    ManageRoles,
    ManageWebhooks,
    ManageEmojis,
}

impl Permission {
    /// Human readable name used in failure messages
    pub fn name(self) -> &'static str {
        match self {
            Permission::CreateInstantInvite => "Create Instant Invite",
            Permission::KickMembers => "Kick Members",
            Permission::BanMembers => "Ban Members",
            Permission::Administrator => "Administrator",
            Permission::ManageChannels => "Manage Channels",
            Permission::ManageServer => "Manage Server",
            Permission::AddReactions => "Add Reactions",
            Permission::ViewAuditLog => "View Audit Logs",
            Permission::PrioritySpeaker => "Priority Speaker",
            Permission::ViewChannel => "View Channel",
            Permission::SendMessages => "Send Messages",
            Permission::SendTtsMessages => "Send TTS Messages",
            Permission::ManageMessages => "Manage Messages",
            Permission::EmbedLinks => "Embed Links",
            Permission::AttachFiles => "Attach Files",
            Permission::ReadMessageHistory => "Read History",
            Permission::MentionEveryone => "Mention Everyone",
            Permission::UseExternalEmojis => "Use External Emojis",
            Permission::ViewGuildInsights => "View Server Insights",
            Permission::VoiceStream => "Video",
            Permission::VoiceConnect => "Connect",
            Permission::VoiceSpeak => "Speak",
            Permission::VoiceMuteOthers => "Mute Members",
            Permission::VoiceDeafenOthers => "Deafen Members",
            Permission::VoiceMoveOthers => "Move Members",
            Permission::VoiceUseVad => "Use Voice Activity",
            Permission::ChangeNickname => "Change Nickname",
            Permission::ManageNicknames => "Manage Nicknames",
            Permission::ManageRoles => "Manage Permissions",
            Permission::ManageWebhooks => "Manage Webhooks",
            Permission::ManageEmojis => "Manage Emojis",
        }
    }

    /// Whether the permission can be granted or denied by channel overwrites
    pub fn is_channel(self) -> bool {
        !matches!(
            self,
            Permission::KickMembers
                | Permission::BanMembers
                | Permission::Administrator
                | Permission::ManageServer
                | Permission::ViewAuditLog
                | Permission::ViewGuildInsights
                | Permission::ChangeNickname
                | Permission::ManageNicknames
                | Permission::ManageEmojis
        )
    }

    /// Whether the permission is only meaningful inside a voice channel
    pub fn is_voice(self) -> bool {
        matches!(
            self,
            Permission::VoiceStream
                | Permission::VoiceConnect
                | Permission::VoiceSpeak
                | Permission::VoiceMuteOthers
                | Permission::VoiceDeafenOthers
                | Permission::VoiceMoveOthers
                | Permission::VoiceUseVad
        )
    }

    /// The serenity bitflag for this permission
    pub fn bits(self) -> Permissions {
        match self {
            Permission::CreateInstantInvite => Permissions::CREATE_INSTANT_INVITE,
            Permission::KickMembers => Permissions::KICK_MEMBERS,
            Permission::BanMembers => Permissions::BAN_MEMBERS,
            Permission::Administrator => Permissions::ADMINISTRATOR,
            Permission::ManageChannels => Permissions::MANAGE_CHANNELS,
            Permission::ManageServer => Permissions::MANAGE_GUILD,
            Permission::AddReactions => Permissions::ADD_REACTIONS,
            Permission::ViewAuditLog => Permissions::VIEW_AUDIT_LOG,
            Permission::PrioritySpeaker => Permissions::PRIORITY_SPEAKER,
            Permission::ViewChannel => Permissions::VIEW_CHANNEL,
            Permission::SendMessages => Permissions::SEND_MESSAGES,
            Permission::SendTtsMessages => Permissions::SEND_TTS_MESSAGES,
            Permission::ManageMessages => Permissions::MANAGE_MESSAGES,
            Permission::EmbedLinks => Permissions::EMBED_LINKS,
            Permission::AttachFiles => Permissions::ATTACH_FILES,
            Permission::ReadMessageHistory => Permissions::READ_MESSAGE_HISTORY,
            Permission::MentionEveryone => Permissions::MENTION_EVERYONE,
            Permission::UseExternalEmojis => Permissions::USE_EXTERNAL_EMOJIS,
            Permission::ViewGuildInsights => Permissions::VIEW_GUILD_INSIGHTS,
            Permission::VoiceStream => Permissions::STREAM,
            Permission::VoiceConnect => Permissions::CONNECT,
            Permission::VoiceSpeak => Permissions::SPEAK,
            Permission::VoiceMuteOthers => Permissions::MUTE_MEMBERS,
            Permission::VoiceDeafenOthers => Permissions::DEAFEN_MEMBERS,
            Permission::VoiceMoveOthers => Permissions::MOVE_MEMBERS,
            Permission::VoiceUseVad => Permissions::USE_VAD,
            Permission::ChangeNickname => Permissions::CHANGE_NICKNAME,
            Permission::ManageNicknames => Permissions::MANAGE_NICKNAMES,
            Permission::ManageRoles => Permissions::MANAGE_ROLES,
            Permission::ManageWebhooks => Permissions::MANAGE_WEBHOOKS,
            Permission::ManageEmojis => Permissions::MANAGE_EMOJIS_AND_STICKERS,
        }
    }

    /// Check this permission against a resolved permission set
    ///
    /// Administrator implies every permission.
    pub fn granted_by(self, permissions: Permissions) -> bool {
        permissions.contains(Permissions::ADMINISTRATOR) || permissions.contains(self.bits())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
