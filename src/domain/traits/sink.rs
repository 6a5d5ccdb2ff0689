use async_trait::async_trait;
use crate::domain::entities::Reply;
use crate::application::errors::BotError;

/// Reply sink - abstraction for the chat platform's outbound side
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver a reply to the channel a message came from
    async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError>;

    /// Delete a message that tripped a filter
    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<(), BotError>;

    /// Identity of the bot account behind this sink
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
