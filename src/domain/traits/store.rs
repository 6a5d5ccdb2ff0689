use async_trait::async_trait;
use crate::application::errors::StorageError;
use crate::domain::entities::GuildConfig;

/// Guild state store - abstraction for prefix and filter persistence.
///
/// Guilds are created lazily: reading a guild that was never written yields
/// the store's default prefix and an empty filter list.
#[async_trait]
pub trait GuildStore: Send + Sync {
    async fn get_command_prefix(&self, guild_id: &str) -> Result<String, StorageError>;
    async fn set_command_prefix(&self, guild_id: &str, prefix: &str) -> Result<(), StorageError>;

    /// Filters in stored order
    async fn get_filters(&self, guild_id: &str) -> Result<Vec<String>, StorageError>;
    /// Replace the whole filter list
    async fn set_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError>;
    /// Append to the filter list
    async fn add_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError>;

    /// Ids of every guild with stored state
    async fn list_guilds(&self) -> Result<Vec<String>, StorageError>;

    async fn get_guild_config(&self, guild_id: &str) -> Result<GuildConfig, StorageError> {
        let prefix = self.get_command_prefix(guild_id).await?;
        let filters = self.get_filters(guild_id).await?;
        Ok(GuildConfig::new(guild_id, prefix).with_filters(filters))
    }
}
