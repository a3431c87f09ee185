//! Dispatch outcome listener
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::{debug, error, info};

use super::handler::SlashCommand;
use super::invocation::Invocation;

/// Observer of dispatch outcomes
///
/// At most one of these fires per invocation. All methods are fire-and-forget
/// and default to doing nothing, so a listener only overrides what it needs.
pub trait CommandListener: Send + Sync {
    /// A guard rejected the invocation
    fn on_terminated(&self, _invocation: &dyn Invocation, _command: &dyn SlashCommand) {}

    /// The handler returned successfully
    fn on_completed(&self, _invocation: &dyn Invocation, _command: &dyn SlashCommand) {}

    /// The handler returned an error
    fn on_exception(
        &self,
        _invocation: &dyn Invocation,
        _command: &dyn SlashCommand,
        _error: &anyhow::Error,
    ) {
    }
}

/// Listener that writes every outcome to the log
pub struct LoggingListener;

impl CommandListener for LoggingListener {
    fn on_terminated(&self, invocation: &dyn Invocation, command: &dyn SlashCommand) {
        debug!(
            "/{} terminated for user {} in channel {}",
            command.descriptor().name,
            invocation.user_id(),
            invocation.channel_id()
        );
    }

    fn on_completed(&self, invocation: &dyn Invocation, command: &dyn SlashCommand) {
        info!(
            "/{} completed for user {}",
            command.descriptor().name,
            invocation.user_id()
        );
    }

    fn on_exception(
        &self,
        invocation: &dyn Invocation,
        command: &dyn SlashCommand,
        error: &anyhow::Error,
    ) {
        error!(
            "/{} failed for user {}: {error:#}",
            command.descriptor().name,
            invocation.user_id()
        );
    }
}
