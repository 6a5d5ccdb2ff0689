/// A filter term that matched some content, with a confidence in `0.0..=1.0`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMatch {
    pub term: String,
    pub confidence: f64,
}

impl FilterMatch {
    pub fn new(term: impl Into<String>, confidence: f64) -> Self {
        Self {
            term: term.into(),
            confidence,
        }
    }

    /// Text matches are always certain
    pub fn exact(term: impl Into<String>) -> Self {
        Self::new(term, 1.0)
    }
}

/// Matches produced by scanning one piece of content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMatches {
    matches: Vec<FilterMatch>,
}

impl FilterMatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, m: FilterMatch) {
        self.matches.push(m);
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterMatch> {
        self.matches.iter()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.term.as_str()).collect()
    }

    /// Sort in place by descending confidence (stable)
    pub fn sort(&mut self) {
        self.matches
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    }
}
