//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Message routing, text scanning, per-guild locking
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing and dispatching

pub mod errors;
pub mod services;
pub mod messaging;
