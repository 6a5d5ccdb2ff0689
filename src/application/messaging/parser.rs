//! Command parser - Turns raw message text into a command invocation

use crate::application::errors::CommandError;
use crate::domain::entities::{Command, ParsedInvocation, COMMAND_KEYWORDS};

/// Whether `text` starts with the guild's command prefix (ignoring case)
pub fn is_command(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Parse a command message for a guild using `prefix`.
///
/// Matching is case-insensitive and the whole message is lowercased, so the
/// argument comes back lowercased too. Keywords are tried with starts-with
/// matching in [`COMMAND_KEYWORDS`] order.
///
/// For [`Command::SetPrefix`] the argument is everything after the guild
/// prefix rather than after the keyword.
pub fn parse(text: &str, prefix: &str) -> Result<ParsedInvocation, CommandError> {
    let lowered = text.to_lowercase();
    let rest = lowered
        .strip_prefix(prefix.to_lowercase().as_str())
        .ok_or_else(|| CommandError::MissingPrefix {
            prefix: prefix.to_string(),
        })?
        .trim();

    let (keyword, command) = COMMAND_KEYWORDS
        .iter()
        .find(|(keyword, _)| rest.starts_with(keyword))
        .copied()
        .ok_or_else(|| CommandError::UnrecognizedCommand(rest.to_string()))?;

    let argument = match command {
        Command::SetPrefix => rest,
        _ => rest[keyword.len()..].trim(),
    };

    tracing::debug!("Parsed {} with argument {:?}", command, argument);
    Ok(ParsedInvocation::new(command, argument))
}
