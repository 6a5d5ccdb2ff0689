//! In-memory guild store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::entities::GuildConfig;
use crate::domain::traits::GuildStore;

/// Guild state kept in process memory. Lost on restart.
pub struct MemoryStore {
    default_prefix: String,
    guilds: Arc<RwLock<HashMap<String, GuildConfig>>>,
}

impl MemoryStore {
    pub fn new(default_prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: default_prefix.into(),
            guilds: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Run `f` on the guild's entry, creating it with defaults first
    async fn update<F>(&self, guild_id: &str, f: F)
    where
        F: FnOnce(&mut GuildConfig),
    {
        let mut guilds = self.guilds.write().await;
        let entry = guilds
            .entry(guild_id.to_string())
            .or_insert_with(|| GuildConfig::new(guild_id, self.default_prefix.clone()));
        f(entry);
    }
}

#[async_trait]
impl GuildStore for MemoryStore {
    async fn get_command_prefix(&self, guild_id: &str) -> Result<String, StorageError> {
        let guilds = self.guilds.read().await;
        Ok(guilds
            .get(guild_id)
            .map(|g| g.command_prefix.clone())
            .unwrap_or_else(|| self.default_prefix.clone()))
    }

    async fn set_command_prefix(&self, guild_id: &str, prefix: &str) -> Result<(), StorageError> {
        self.update(guild_id, |g| g.command_prefix = prefix.to_string()).await;
        Ok(())
    }

    async fn get_filters(&self, guild_id: &str) -> Result<Vec<String>, StorageError> {
        let guilds = self.guilds.read().await;
        Ok(guilds.get(guild_id).map(|g| g.filters.clone()).unwrap_or_default())
    }

    async fn set_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.update(guild_id, |g| g.filters = filters.to_vec()).await;
        Ok(())
    }

    async fn add_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.update(guild_id, |g| g.add_filters(filters.iter().cloned())).await;
        Ok(())
    }

    async fn list_guilds(&self) -> Result<Vec<String>, StorageError> {
        let mut ids: Vec<String> = self.guilds.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
