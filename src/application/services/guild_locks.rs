//! Per-guild mutual exclusion for read-modify-write on guild state

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::application::errors::StorageError;

type LockTable = Mutex<HashMap<String, Arc<AsyncMutex<()>>>>;

/// Lazily created async mutex per guild id.
///
/// Entries only live while a guild's lock is held or awaited.
#[derive(Default)]
pub struct GuildLocks {
    locks: LockTable,
}

impl GuildLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `guild_id`. Other guilds are unaffected.
    pub async fn lock(&self, guild_id: &str) -> Result<GuildGuard<'_>, StorageError> {
        let lock = {
            let mut locks = self.locks.lock()
                .map_err(|_| StorageError::Lock("guild lock table".to_string()))?;
            locks.entry(guild_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        Ok(GuildGuard {
            guard: Some(lock.lock_owned().await),
            guild_id: guild_id.to_string(),
            table: &self.locks,
        })
    }
}

/// Held access to one guild. Dropping it releases the lock.
pub struct GuildGuard<'a> {
    guard: Option<OwnedMutexGuard<()>>,
    guild_id: String,
    table: &'a LockTable,
}

impl Drop for GuildGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());

        // Clones are taken under the table lock, so a count of one means
        // nobody else holds or waits on this guild.
        if let Ok(mut locks) = self.table.lock() {
            if locks.get(&self.guild_id).is_some_and(|l| Arc::strong_count(l) == 1) {
                locks.remove(&self.guild_id);
            }
        }
    }
}
