//! Recent single-user lookups, persisted newest first.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered lookups.
pub const HISTORY_LIMIT: usize = 10;

/// A remembered successful single-user lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub username: String,
    /// Display name at lookup time
    pub name: String,
    /// Avatar URL at lookup time
    pub avatar: String,
    /// Lookup time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Newest-first list of lookups without duplicate usernames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    /// Build from stored entries as-is. Deduplication only happens on write.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Record a lookup: drop any entry with the same username, put the new
    /// one first, keep at most [`HISTORY_LIMIT`].
    ///
    /// Usernames compare exactly; entries carry the backend's login, so a
    /// user looked up under different casing still maps to one entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries
            .retain(|existing| existing.username != entry.username);
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, timestamp: i64) -> HistoryEntry {
        HistoryEntry {
            username: username.to_string(),
            name: format!("{} name", username),
            avatar: format!("https://avatars.example/{}", username),
            timestamp,
        }
    }

    #[test]
    fn test_record_prepends_newest() {
        let mut history = SearchHistory::default();
        history.record(entry("a", 1));
        history.record(entry("b", 2));

        let names: Vec<_> = history.entries().iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_record_caps_at_limit() {
        let mut history = SearchHistory::default();
        for i in 0..11 {
            history.record(entry(&format!("user{}", i), i));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].username, "user10");
        assert_eq!(history.entries()[9].username, "user1");
    }

    #[test]
    fn test_repeat_lookup_moves_to_front() {
        let mut history = SearchHistory::default();
        history.record(entry("a", 1));
        history.record(entry("b", 2));
        history.record(entry("c", 3));
        history.record(entry("a", 4));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].username, "a");
        assert_eq!(history.entries()[0].timestamp, 4);
        assert_eq!(history.entries()[1].username, "c");
    }

    #[test]
    fn test_usernames_compare_exactly() {
        let mut history = SearchHistory::default();
        history.record(entry("octocat", 1));
        history.record(entry("Octocat", 2));

        let names: Vec<_> = history.entries().iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["Octocat", "octocat"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut history = SearchHistory::default();
        history.record(entry("octocat", 1700000000000));

        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["username"], "octocat");
        assert_eq!(json[0]["timestamp"], 1700000000000i64);
    }
}
