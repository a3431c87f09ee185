//! # Command Cooldowns
//!
//! Cooldown scopes, key derivation and a DashMap-backed cooldown store. Keys are
//! plain strings so any store (in-memory, Redis, database) can hold them.
//!
//! - **Version**: 2.0.1
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.1: Cap cooldown length instead of overflowing the expiry instant
//! - 2.0.0: Replace sliding-window rate limiter with scoped per-command cooldowns
//! - 1.1.0: Multi-bot support with (bot_id, user_id) composite keys
//! - 1.0.0: Initial release with per-user sliding window rate limiting

use dashmap::DashMap;
use log::warn;
use std::time::Duration;
use tokio::time::Instant;

use super::invocation::Invocation;

/// Longest cooldown the in-memory store tracks (100 years)
pub const MAX_COOLDOWN_SECONDS: u64 = 100 * 365 * 24 * 60 * 60;

/// Dimensions a cooldown is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CooldownScope {
    /// Per user, across every guild and channel
    #[default]
    User,
    /// Per user in each guild, falls back to [`CooldownScope::UserChannel`] in DMs
    UserGuild,
    /// Per user in each channel
    UserChannel,
    /// Per guild, falls back to [`CooldownScope::Channel`] in DMs
    Guild,
    /// Per channel
    Channel,
    /// Per gateway shard
    Shard,
    /// Per user on each shard
    UserShard,
    /// One cooldown shared by everyone
    Global,
}

impl CooldownScope {
    /// Clause appended to the cooldown message for this scope
    pub fn error_clause(self) -> &'static str {
        match self {
            CooldownScope::User => "",
            CooldownScope::UserGuild | CooldownScope::Guild => "in this server",
            CooldownScope::UserChannel | CooldownScope::Channel => "in this channel",
            CooldownScope::Shard | CooldownScope::UserShard => "on this shard",
            CooldownScope::Global => "globally",
        }
    }

    /// Scope used instead of this one when the invocation has no guild
    pub fn fallback(self) -> Option<CooldownScope> {
        match self {
            CooldownScope::UserGuild => Some(CooldownScope::UserChannel),
            CooldownScope::Guild => Some(CooldownScope::Channel),
            _ => None,
        }
    }

    /// The scope actually applied to an invocation, and whether it was a fallback
    pub fn resolve(self, invocation: &dyn Invocation) -> (CooldownScope, bool) {
        match (self.fallback(), invocation.guild_id()) {
            (Some(fallback), None) => (fallback, true),
            _ => (self, false),
        }
    }

    fn key_dimensions(self, invocation: &dyn Invocation) -> String {
        let user = invocation.user_id();
        let channel = invocation.channel_id();
        let guild = invocation.guild_id().unwrap_or_default();
        let shard = invocation.shard_id();

        match self {
            CooldownScope::User => format!("U:{user}"),
            CooldownScope::UserGuild => format!("U:{user}|G:{guild}"),
            CooldownScope::UserChannel => format!("U:{user}|C:{channel}"),
            CooldownScope::Guild => format!("G:{guild}"),
            CooldownScope::Channel => format!("C:{channel}"),
            CooldownScope::Shard => format!("S:{shard}"),
            CooldownScope::UserShard => format!("U:{user}|S:{shard}"),
            CooldownScope::Global => "Global".to_string(),
        }
    }
}

/// Build the cooldown key for `command_name` under `scope`
pub fn cooldown_key(command_name: &str, scope: CooldownScope, invocation: &dyn Invocation) -> String {
    let (effective, _) = scope.resolve(invocation);
    format!("{command_name}|{}", effective.key_dimensions(invocation))
}

/// Build the user-facing cooldown message
pub fn cooldown_message(
    warning: &str,
    remaining: u64,
    scope: CooldownScope,
    invocation: &dyn Invocation,
) -> String {
    let front = format!("{warning} That command is on cooldown for {remaining} more seconds");
    let (effective, fell_back) = scope.resolve(invocation);

    if scope == CooldownScope::User {
        format!("{front}!")
    } else if fell_back {
        format!("{front} {}!", effective.error_clause())
    } else {
        format!("{front} {}!", scope.error_clause())
    }
}

/// Storage for cooldown expiries
///
/// Implementations must be safe to call from concurrent dispatches.
pub trait CooldownStore: Send + Sync {
    /// Whole seconds left on `key`, rounded up; 0 when not on cooldown
    fn remaining(&self, key: &str) -> u64;

    /// Start a cooldown of `seconds` on `key`, replacing any previous one
    fn apply(&self, key: &str, seconds: u64);
}

/// In-process cooldown store
#[derive(Default)]
pub struct InMemoryCooldownStore {
    expiries: DashMap<String, Instant>,
}

impl InMemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every expired entry
    pub fn clean(&self) {
        let now = Instant::now();
        self.expiries.retain(|_, expiry| *expiry > now);
    }

    /// Number of tracked keys, including ones not yet cleaned
    pub fn len(&self) -> usize {
        self.expiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }
}

impl CooldownStore for InMemoryCooldownStore {
    fn remaining(&self, key: &str) -> u64 {
        let now = Instant::now();
        let left = match self.expiries.get(key) {
            Some(expiry) => expiry.saturating_duration_since(now),
            None => return 0,
        };

        if left.is_zero() {
            self.expiries.remove_if(key, |_, expiry| *expiry <= now);
            return 0;
        }

        let millis = u64::try_from(left.as_millis()).unwrap_or(u64::MAX);
        millis.div_ceil(1000)
    }

    fn apply(&self, key: &str, seconds: u64) {
        let length = Duration::from_secs(seconds.min(MAX_COOLDOWN_SECONDS));
        let Some(expiry) = Instant::now().checked_add(length) else {
            warn!("Cooldown of {seconds}s for {key} is out of range, not applied");
            return;
        };
        self.expiries.insert(key.to_string(), expiry);
    }
}
