//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: In-memory guild store
//! - Database: SQLite guild store
//! - Adapters: Platform integrations (console)

pub mod config;
pub mod storage;
pub mod database;
pub mod adapters;

use std::sync::Arc;

use crate::application::errors::StorageError;
use crate::domain::traits::GuildStore;
use config::{Config, StorageBackend};

/// Build the guild store selected in the config
pub fn open_store(config: &Config) -> Result<Arc<dyn GuildStore>, StorageError> {
    let prefix = config.bot.default_prefix.clone();
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory guild store");
            Ok(Arc::new(storage::MemoryStore::new(prefix)))
        }
        StorageBackend::Sqlite => {
            tracing::info!("Using SQLite guild store at {}", config.storage.path.display());
            Ok(Arc::new(database::SqliteStore::open(&config.storage.path, prefix)?))
        }
    }
}
