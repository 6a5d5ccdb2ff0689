//! Command handling - Parsing and dispatching prefixed commands

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandDispatcher, DispatchResult};
