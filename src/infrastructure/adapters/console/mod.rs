//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::application::errors::BotError;
use crate::domain::entities::{HelpPayload, Reply};
use crate::domain::traits::{BotInfo, ReplySink};

/// Console sink: prints replies and deletions to stdout
pub struct ConsoleAdapter {
    info: BotInfo,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            info: BotInfo {
                id: "console-bot".to_string(),
                username: name.to_lowercase(),
                name,
            },
        }
    }

    /// Line reader over stdin for the interactive loop
    pub fn stdin_lines() -> Lines<BufReader<Stdin>> {
        BufReader::new(tokio::io::stdin()).lines()
    }

    fn print_help(help: &HelpPayload) {
        println!("[BOT] {} | {}", help.author, help.title);
        println!("  {}", help.description);
        for field in &help.fields {
            println!("  {:<10} {}", field.name, field.text);
        }
        println!("  -- {}", help.footer);
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("FilterBot")
    }
}

#[async_trait]
impl ReplySink for ConsoleAdapter {
    async fn send_reply(&self, _channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        match reply {
            Reply::Text(text) => println!("[BOT] {}", text),
            Reply::Help(help) => Self::print_help(help),
        }
        Ok(())
    }

    async fn delete_message(&self, _channel_id: &str, message_id: &str) -> Result<(), BotError> {
        println!("[BOT] deleted message {}", message_id);
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
