//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Command, GuildConfig, Reply)
//! - Traits: Abstractions for infrastructure (GuildStore, ReplySink)

pub mod entities;
pub mod traits;
