//! Command dispatcher - Executes parsed commands against guild state

use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::services::GuildLocks;
use crate::domain::entities::guild::{remove_first_match, render_filters};
use crate::domain::entities::{Command, Guild, HelpPayload, ParsedInvocation, Reply};
use crate::domain::traits::{GuildStore, ReplySink};
use super::parser;

/// Result of dispatching one command
pub type DispatchResult = Result<Reply, CommandError>;

/// Routes parsed commands to their operations and replies through a sink
pub struct CommandDispatcher {
    store: Arc<dyn GuildStore>,
    locks: GuildLocks,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn GuildStore>) -> Self {
        Self {
            store,
            locks: GuildLocks::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn GuildStore> {
        &self.store
    }

    /// Parse `text` with the guild's prefix, execute it, and send the reply.
    ///
    /// The caller must only pass messages that start with the guild prefix.
    /// Delivery failures are logged, not returned.
    pub async fn handle(&self, guild: &Guild, channel_id: &str, text: &str, sink: &dyn ReplySink) -> DispatchResult {
        let prefix = self.store.get_command_prefix(&guild.id).await?;
        self.handle_with_prefix(guild, channel_id, text, &prefix, sink).await
    }

    /// Same as [`handle`](Self::handle), but parses with a prefix the caller already read
    pub async fn handle_with_prefix(
        &self,
        guild: &Guild,
        channel_id: &str,
        text: &str,
        prefix: &str,
        sink: &dyn ReplySink,
    ) -> DispatchResult {
        let invocation = parser::parse(text, prefix)?;
        let reply = self.execute(guild, &invocation).await?;

        if let Err(e) = sink.send_reply(channel_id, &reply).await {
            tracing::warn!("[{}] Failed to deliver reply: {}", guild.id, e);
        }
        Ok(reply)
    }

    /// Run an already parsed command and build its reply.
    ///
    /// Mutating commands hold the guild lock for the whole read-modify-write.
    pub async fn execute(&self, guild: &Guild, invocation: &ParsedInvocation) -> DispatchResult {
        let _guard = if invocation.command.is_mutating() {
            Some(self.locks.lock(&guild.id).await?)
        } else {
            None
        };

        let argument = invocation.argument.as_str();
        match invocation.command {
            Command::Help => Ok(Reply::Help(HelpPayload::commands())),
            Command::Add => self.add(guild, argument).await,
            Command::Remove => self.remove(guild, argument).await,
            Command::Test => Ok(self.test(guild)),
            Command::List => self.list(guild).await,
            Command::SetPrefix => match self.set_prefix(guild, argument).await {
                Err(CommandError::InvalidPrefix(_)) => Ok(Reply::text("No prefix was provided")),
                other => other,
            },
        }
    }

    async fn add(&self, guild: &Guild, filter: &str) -> DispatchResult {
        if filter.is_empty() {
            return Ok(Reply::text("No filter was provided"));
        }

        self.store.add_filters(&guild.id, &[filter.to_string()]).await?;
        tracing::info!("[{}] Added filter {:?}", guild.id, filter);

        Ok(Reply::text(format!("Filter term: \"{}\" added", filter)))
    }

    async fn remove(&self, guild: &Guild, filter: &str) -> DispatchResult {
        if filter.is_empty() {
            return Ok(Reply::text("No filter was provided"));
        }

        let mut filters = self.store.get_filters(&guild.id).await?;

        match remove_first_match(&mut filters, filter) {
            Some(removed) => {
                self.store.set_filters(&guild.id, &filters).await?;
                tracing::info!("[{}] Removed filter {:?}", guild.id, removed);
                Ok(Reply::text(format!("Successfully removed filter \"{}\"", removed)))
            }
            None => Ok(Reply::text(format!("Unable to find filter \"{}\"", filter))),
        }
    }

    fn test(&self, guild: &Guild) -> Reply {
        tracing::debug!("[{}] Test command requested", guild.id);
        Reply::text("Media filter detection is not supported yet.")
    }

    async fn list(&self, guild: &Guild) -> DispatchResult {
        let filters = self.store.get_filters(&guild.id).await?;
        match render_filters(&filters) {
            Some(rendered) => Ok(Reply::text(format!("Filters in {}: {}", guild.name, rendered))),
            None => {
                let prefix = self.store.get_command_prefix(&guild.id).await?;
                Ok(Reply::text(format!(
                    "There are no filters added in this server, use {}add [term] to add a filter.",
                    prefix
                )))
            }
        }
    }

    async fn set_prefix(&self, guild: &Guild, prefix: &str) -> DispatchResult {
        let prefix = validate_prefix(prefix)?;
        self.store.set_command_prefix(&guild.id, prefix).await?;
        tracing::info!("[{}] Command prefix set to {:?}", guild.id, prefix);

        Ok(Reply::text(format!("Prefix successfully set to {} (applies server-wide).", prefix)))
    }
}

/// Prefixes must contain something other than whitespace
pub fn validate_prefix(prefix: &str) -> Result<&str, CommandError> {
    if prefix.trim().is_empty() {
        return Err(CommandError::InvalidPrefix(prefix.to_string()));
    }
    Ok(prefix)
}
