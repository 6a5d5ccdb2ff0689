use serde::{Deserialize, Serialize};

/// Separator used when rendering a filter list
pub const FILTER_SEPARATOR: &str = ", ";

/// Identity of the guild a message was sent in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guild {
    pub id: String,
    pub name: String,
}

impl Guild {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Per-guild state: command prefix and filter terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GuildConfig {
    pub guild_id: String,
    pub command_prefix: String,
    pub filters: Vec<String>,
}

impl GuildConfig {
    pub fn new(guild_id: impl Into<String>, command_prefix: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            command_prefix: command_prefix.into(),
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    /// Append terms as given. Duplicates are kept.
    pub fn add_filters(&mut self, terms: impl IntoIterator<Item = String>) {
        self.filters.extend(terms);
    }
}

/// Position of the first filter equal to `term`, ignoring case
pub fn find_filter(filters: &[String], term: &str) -> Option<usize> {
    let needle = term.to_lowercase();
    filters.iter().position(|f| f.to_lowercase() == needle)
}

/// Remove only the first case-insensitive match; order of the rest is kept
pub fn remove_first_match(filters: &mut Vec<String>, term: &str) -> Option<String> {
    find_filter(filters, term).map(|i| filters.remove(i))
}

/// Filters joined for display, `None` when there are none
pub fn render_filters(filters: &[String]) -> Option<String> {
    if filters.is_empty() {
        None
    } else {
        Some(filters.join(FILTER_SEPARATOR))
    }
}
