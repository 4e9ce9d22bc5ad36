// Session history of shortened URLs
//
// Entries are only ever prepended. Nothing is removed or rewritten, and the
// whole list goes away when the process exits.

use std::collections::VecDeque;

/// One successful shortening: the URL that was submitted and what came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub long_url: String,
    pub shortened_url: String,
}

impl HistoryEntry {
    pub fn new(long_url: impl Into<String>, shortened_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            shortened_url: shortened_url.into(),
        }
    }
}

/// Newest-first list of shortened URLs for this session
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new result at the head of the list
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, where 0 is the most recent
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::new();
        for i in 1..=3 {
            history.prepend(HistoryEntry::new(
                format!("https://example.com/{i}"),
                format!("https://short.ly/{i}"),
            ));
        }

        let shorts: Vec<_> = history.iter().map(|e| e.shortened_url.as_str()).collect();
        assert_eq!(
            shorts,
            ["https://short.ly/3", "https://short.ly/2", "https://short.ly/1"]
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).unwrap().long_url, "https://example.com/3");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::new();
        history.prepend(HistoryEntry::new("https://a.example", "https://short.ly/a"));
        history.prepend(HistoryEntry::new("https://a.example", "https://short.ly/a"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), history.get(1));
    }
}
