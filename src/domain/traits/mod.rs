//! Domain traits - Abstractions for infrastructure implementations

pub mod sink;
pub mod store;

pub use sink::{BotInfo, ReplySink};
pub use store::GuildStore;
