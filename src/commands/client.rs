//! Shared command client configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation replacing the per-handler shared context

use std::sync::Arc;

use super::cooldown::{CooldownStore, InMemoryCooldownStore};
use super::listener::CommandListener;
use crate::core::Config;

/// Configuration shared by every command, passed explicitly into each dispatch
///
/// Contains:
/// - Owner and co-owner ids for owner-only commands and cooldown bypass
/// - Success/warning/error prefixes used in replies
/// - The cooldown store
/// - An optional outcome listener
#[derive(Clone)]
pub struct CommandClient {
    owner_id: u64,
    co_owner_ids: Vec<u64>,
    success: String,
    warning: String,
    error: String,
    cooldowns: Arc<dyn CooldownStore>,
    listener: Option<Arc<dyn CommandListener>>,
}

impl CommandClient {
    /// Create a client with default prefixes and an in-memory cooldown store
    pub fn new(owner_id: u64) -> Self {
        Self {
            owner_id,
            co_owner_ids: Vec::new(),
            success: "✅".to_string(),
            warning: "⚠️".to_string(),
            error: "❌".to_string(),
            cooldowns: Arc::new(InMemoryCooldownStore::new()),
            listener: None,
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.owner_id)
            .with_co_owners(config.co_owner_ids.clone())
            .with_emojis(&config.success_emoji, &config.warning_emoji, &config.error_emoji)
    }

    pub fn with_co_owners(mut self, co_owner_ids: Vec<u64>) -> Self {
        self.co_owner_ids = co_owner_ids;
        self
    }

    pub fn with_emojis(mut self, success: &str, warning: &str, error: &str) -> Self {
        self.success = success.to_string();
        self.warning = warning.to_string();
        self.error = error.to_string();
        self
    }

    pub fn with_cooldown_store(mut self, store: Arc<dyn CooldownStore>) -> Self {
        self.cooldowns = store;
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn CommandListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn co_owner_ids(&self) -> &[u64] {
        &self.co_owner_ids
    }

    /// Whether `user_id` is the owner or a co-owner
    pub fn is_owner(&self, user_id: u64) -> bool {
        user_id == self.owner_id || self.co_owner_ids.contains(&user_id)
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn warning(&self) -> &str {
        &self.warning
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn cooldowns(&self) -> &dyn CooldownStore {
        self.cooldowns.as_ref()
    }

    pub fn listener(&self) -> Option<&dyn CommandListener> {
        self.listener.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::listener::LoggingListener;

    #[test]
    fn test_is_owner() {
        let client = CommandClient::new(1).with_co_owners(vec![2, 3]);
        assert!(client.is_owner(1));
        assert!(client.is_owner(3));
        assert!(!client.is_owner(4));
    }

    #[test]
    fn test_defaults() {
        let client = CommandClient::new(1);
        assert!(client.co_owner_ids().is_empty());
        assert!(client.listener().is_none());
        assert_eq!(client.error(), "❌");
        assert_eq!(client.cooldowns().remaining("anything"), 0);
    }

    #[test]
    fn test_builder() {
        let client = CommandClient::new(1)
            .with_emojis("ok", "warn", "err")
            .with_listener(Arc::new(LoggingListener));
        assert_eq!(client.success(), "ok");
        assert_eq!(client.warning(), "warn");
        assert_eq!(client.error(), "err");
        assert!(client.listener().is_some());
    }

    #[test]
    fn test_client_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<CommandClient>();
    }
}
