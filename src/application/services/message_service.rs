use std::sync::Arc;

use crate::application::errors::{BotError, CommandError};
use crate::application::messaging::{parser, CommandDispatcher};
use crate::domain::entities::{FilterMatches, InboundMessage, Reply};
use crate::domain::traits::ReplySink;
use super::text_scanner;

/// What happened to an inbound message
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Sent by the bot itself
    Ignored,
    /// Not sent in a guild; refused
    DirectMessage,
    /// A command ran and produced this reply
    Command(Reply),
    /// Started with the prefix but named no known command
    Unrecognized(String),
    /// Plain text that tripped filters and was deleted
    Filtered(FilterMatches),
    /// Plain text with no filter hits
    Clean,
}

/// Service for processing messages
pub struct MessageService {
    dispatcher: Arc<CommandDispatcher>,
    reply_on_unknown: bool,
}

impl MessageService {
    pub fn new(dispatcher: Arc<CommandDispatcher>) -> Self {
        Self {
            dispatcher,
            reply_on_unknown: false,
        }
    }

    /// Reply with a hint when a command is not recognized instead of staying silent
    pub fn with_reply_on_unknown(mut self, enabled: bool) -> Self {
        self.reply_on_unknown = enabled;
        self
    }

    /// Process an incoming message. Only store failures are returned as errors.
    pub async fn on_message(&self, message: &InboundMessage, sink: &dyn ReplySink) -> Result<Outcome, BotError> {
        if message.author_id == sink.bot_info().id {
            return Ok(Outcome::Ignored);
        }

        let Some(guild) = &message.guild else {
            respond(sink, &message.channel_id, &Reply::text("This bot does not support direct messages or groups")).await;
            return Ok(Outcome::DirectMessage);
        };

        let store = self.dispatcher.store();
        let prefix = store.get_command_prefix(&guild.id).await?;

        if parser::is_command(&message.text, &prefix) {
            let handled = self.dispatcher
                .handle_with_prefix(guild, &message.channel_id, &message.text, &prefix, sink)
                .await;
            return match handled {
                Ok(reply) => Ok(Outcome::Command(reply)),
                Err(CommandError::UnrecognizedCommand(rest)) => {
                    tracing::warn!("[{}] Unrecognized command: {:?}", guild.id, rest);
                    if self.reply_on_unknown {
                        let hint = format!("Unknown command. Use {}help to list commands.", prefix);
                        respond(sink, &message.channel_id, &Reply::text(hint)).await;
                    }
                    Ok(Outcome::Unrecognized(rest))
                }
                Err(CommandError::MissingPrefix { prefix }) => {
                    tracing::warn!("[{}] Message no longer starts with prefix {:?}", guild.id, prefix);
                    Ok(Outcome::Unrecognized(message.text.clone()))
                }
                // Store failures surface as storage errors, not command errors
                Err(CommandError::Storage(e)) => Err(BotError::Storage(e)),
                Err(e) => Err(BotError::Command(e)),
            };
        }

        if !message.has_text() {
            return Ok(Outcome::Clean);
        }

        let filters = store.get_filters(&guild.id).await?;
        let matches = text_scanner::scan(&message.text, &filters);
        if matches.is_empty() {
            return Ok(Outcome::Clean);
        }

        tracing::info!(
            "[{}] Message {} sent at {} matched filters {:?}",
            guild.id,
            message.id,
            message.timestamp.format("%Y-%m-%d %H:%M:%S"),
            matches.terms()
        );
        if let Err(e) = sink.delete_message(&message.channel_id, &message.id).await {
            tracing::warn!("[{}] Failed to delete message {}: {}", guild.id, message.id, e);
        }
        Ok(Outcome::Filtered(matches))
    }
}

/// Send a reply, logging instead of failing when delivery does not work
async fn respond(sink: &dyn ReplySink, channel_id: &str, reply: &Reply) {
    if let Err(e) = sink.send_reply(channel_id, reply).await {
        tracing::warn!("[{}] Failed to deliver reply: {}", channel_id, e);
    }
}
