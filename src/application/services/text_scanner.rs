//! Text scanning against a guild's filter list

use crate::domain::entities::{FilterMatch, FilterMatches};

/// Case-insensitive substring scan. Matches come back by descending confidence,
/// ties in filter order.
pub fn scan(text: &str, filters: &[String]) -> FilterMatches {
    let mut matches = FilterMatches::new();
    if text.is_empty() {
        return matches;
    }

    let text = text.to_lowercase();
    for filter in filters.iter().filter(|f| !f.is_empty()) {
        if text.contains(&filter.to_lowercase()) {
            matches.push(FilterMatch::exact(filter.clone()));
        }
    }
    matches.sort();
    matches
}
