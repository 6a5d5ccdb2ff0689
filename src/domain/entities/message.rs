use super::Guild;
use chrono::{DateTime, Utc};

/// A message delivered to the bot by the chat platform
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    pub channel_id: String,
    /// `None` for direct or group messages
    pub guild: Option<Guild>,
    pub author_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(channel_id: impl Into<String>, author_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel_id: channel_id.into(),
            guild: None,
            author_id: author_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Message sent inside a guild channel
    pub fn in_guild(guild: Guild, channel_id: impl Into<String>, author_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(channel_id, author_id, text).with_guild(guild)
    }

    pub fn with_guild(mut self, guild: Guild) -> Self {
        self.guild = Some(guild);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
