use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Command;

/// A titled field of a help payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpField {
    pub name: String,
    pub text: String,
}

/// Structured help message, rendered by the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpPayload {
    pub author: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<HelpField>,
    pub footer: String,
}

static HELP: Lazy<HelpPayload> = Lazy::new(|| HelpPayload {
    author: "FilterBot".to_string(),
    title: "Help".to_string(),
    description: "FilterBot filters specified words, images, and videos".to_string(),
    fields: Command::all()
        .map(|cmd| HelpField {
            name: cmd.title().to_string(),
            text: cmd.description().to_string(),
        })
        .collect(),
    footer: "Help Command".to_string(),
});

impl HelpPayload {
    /// Help listing every command
    pub fn commands() -> Self {
        HELP.clone()
    }

    /// Plain text rendering for sinks without rich formatting
    pub fn to_text(&self) -> String {
        let mut out = format!("{} - {}\n{}\n", self.author, self.title, self.description);
        for field in &self.fields {
            out.push_str(&format!("  {}: {}\n", field.name, field.text));
        }
        out.push_str(&self.footer);
        out
    }
}

/// Something the bot sends back to a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Help(HelpPayload),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn render(&self) -> String {
        match self {
            Reply::Text(s) => s.clone(),
            Reply::Help(help) => help.to_text(),
        }
    }
}
