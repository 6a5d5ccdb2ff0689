//! Application services - Business logic orchestration

pub mod guild_locks;
pub mod message_service;
pub mod text_scanner;

pub use guild_locks::GuildLocks;
pub use message_service::{MessageService, Outcome};
