//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod filter_match;
pub mod guild;
pub mod message;
pub mod reply;

pub use command::{Command, ParsedInvocation, COMMAND_KEYWORDS};
pub use filter_match::{FilterMatch, FilterMatches};
pub use guild::{Guild, GuildConfig};
pub use message::InboundMessage;
pub use reply::{HelpField, HelpPayload, Reply};
