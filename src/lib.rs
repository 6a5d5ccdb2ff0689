//! filter-bot: per-guild word filters and prefixed commands for chat platforms

pub mod domain;
pub mod application;
pub mod infrastructure;
