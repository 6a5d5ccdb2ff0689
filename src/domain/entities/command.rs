use std::fmt;

/// Commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Add,
    Remove,
    Test,
    List,
    SetPrefix,
}

/// Keywords in matching priority order. First match wins.
pub const COMMAND_KEYWORDS: [(&str, Command); 6] = [
    ("help", Command::Help),
    ("add", Command::Add),
    ("remove", Command::Remove),
    ("test", Command::Test),
    ("list", Command::List),
    ("setprefix", Command::SetPrefix),
];

impl Command {
    /// All commands, in matching priority order
    pub fn all() -> impl Iterator<Item = Command> {
        COMMAND_KEYWORDS.into_iter().map(|(_, cmd)| cmd)
    }

    /// Lowercase keyword typed after the prefix
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Test => "test",
            Command::List => "list",
            Command::SetPrefix => "setprefix",
        }
    }

    /// Display name used in help output
    pub fn title(&self) -> &'static str {
        match self {
            Command::Help => "Help",
            Command::Add => "Add",
            Command::Remove => "Remove",
            Command::Test => "Test",
            Command::List => "List",
            Command::SetPrefix => "SetPrefix",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Lists commands and description",
            Command::Add => "Adds filter for current server",
            Command::Remove => "Removes filter for current server",
            Command::Test => "Provides list of possible filters given an Image or Video",
            Command::List => "Returns the list of filters added to the current server",
            Command::SetPrefix => "Sets the command prefix for the bot (applies server-wide)",
        }
    }

    /// Whether executing this command writes guild state
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add | Command::Remove | Command::SetPrefix)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A command recognized in a message, plus the text that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub command: Command,
    pub argument: String,
}

impl ParsedInvocation {
    pub fn new(command: Command, argument: impl Into<String>) -> Self {
        Self {
            command,
            argument: argument.into(),
        }
    }
}
