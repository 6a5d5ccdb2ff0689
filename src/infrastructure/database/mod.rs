use async_trait::async_trait;
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::sync::Mutex;

use crate::application::errors::StorageError;
use crate::domain::traits::GuildStore;

/// SQLite-backed guild store
pub struct SqliteStore {
    conn: Mutex<Connection>,
    default_prefix: String,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>, default_prefix: impl Into<String>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, default_prefix)
    }

    pub fn open_in_memory(default_prefix: impl Into<String>) -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, default_prefix)
    }

    fn with_connection(conn: Connection, default_prefix: impl Into<String>) -> Result<Self, StorageError> {
        init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            default_prefix: default_prefix.into(),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> SqliteResult<T>) -> Result<T, StorageError> {
        let mut conn = self.conn.lock()
            .map_err(|_| StorageError::Lock("sqlite connection".to_string()))?;
        Ok(f(&mut conn)?)
    }
}

fn init_tables(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS guilds (
            guild_id TEXT PRIMARY KEY NOT NULL,
            command_prefix TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    // Row id order is the filter order
    conn.execute(
        "CREATE TABLE IF NOT EXISTS filters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            guild_id TEXT NOT NULL,
            term TEXT NOT NULL,
            FOREIGN KEY (guild_id) REFERENCES guilds(guild_id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_filters_guild ON filters(guild_id)",
        [],
    )?;

    Ok(())
}

fn ensure_guild(conn: &Connection, guild_id: &str, default_prefix: &str) -> SqliteResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO guilds (guild_id, command_prefix) VALUES (?1, ?2)",
        [guild_id, default_prefix],
    )?;
    Ok(())
}

fn insert_filters(conn: &Connection, guild_id: &str, filters: &[String]) -> SqliteResult<()> {
    let mut stmt = conn.prepare("INSERT INTO filters (guild_id, term) VALUES (?1, ?2)")?;
    for term in filters {
        stmt.execute(rusqlite::params![guild_id, term])?;
    }
    Ok(())
}

#[async_trait]
impl GuildStore for SqliteStore {
    async fn get_command_prefix(&self, guild_id: &str) -> Result<String, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT command_prefix FROM guilds WHERE guild_id = ?1")?;
            let mut rows = stmt.query([guild_id])?;

            let prefix = match rows.next()? {
                Some(row) => row.get(0)?,
                None => self.default_prefix.clone(),
            };
            Ok(prefix)
        })
    }

    async fn set_command_prefix(&self, guild_id: &str, prefix: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO guilds (guild_id, command_prefix) VALUES (?1, ?2)
                 ON CONFLICT(guild_id) DO UPDATE SET command_prefix = excluded.command_prefix",
                [guild_id, prefix],
            )?;
            Ok(())
        })
    }

    async fn get_filters(&self, guild_id: &str) -> Result<Vec<String>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT term FROM filters WHERE guild_id = ?1 ORDER BY id")?;
            let rows = stmt.query_map([guild_id], |row| row.get::<_, String>(0))?;

            let mut filters = Vec::new();
            for term in rows {
                filters.push(term?);
            }
            Ok(filters)
        })
    }

    async fn set_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            ensure_guild(&tx, guild_id, &self.default_prefix)?;
            tx.execute("DELETE FROM filters WHERE guild_id = ?1", [guild_id])?;
            insert_filters(&tx, guild_id, filters)?;
            tx.commit()
        })
    }

    async fn add_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            ensure_guild(&tx, guild_id, &self.default_prefix)?;
            insert_filters(&tx, guild_id, filters)?;
            tx.commit()
        })
    }

    async fn list_guilds(&self) -> Result<Vec<String>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT guild_id FROM guilds ORDER BY guild_id")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

            let mut guilds = Vec::new();
            for guild in rows {
                guilds.push(guild?);
            }
            Ok(guilds)
        })
    }
}
