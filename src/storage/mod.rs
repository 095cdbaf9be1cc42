//! Local storage layer.
//!
//! The dashboard persists exactly two values: the theme flag and the
//! search history. Reads and writes are synchronous; a single process owns
//! the store at a time.

pub mod local;

pub use local::{FileStore, LocalStore, MemoryStore};

use crate::error::{DashboardError, Result};
use crate::models::{HistoryEntry, SearchHistory, Theme};

/// Storage keys as constants.
pub mod keys {
    pub const THEME: &str = "theme";
    /// JSON array of history entries, newest first
    pub const SEARCH_HISTORY: &str = "searchHistory";
}

/// Read the theme preference. Missing or unrecognised values mean dark.
pub fn load_theme<S: LocalStore + ?Sized>(store: &S) -> Theme {
    match store.get(keys::THEME) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "Unknown stored theme, using default");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference");
            Theme::default()
        }
    }
}

pub fn save_theme<S: LocalStore + ?Sized>(store: &S, theme: Theme) -> Result<()> {
    store.set(keys::THEME, theme.as_str())
}

/// Read the search history. Unreadable or corrupt data means an empty list.
pub fn load_history<S: LocalStore + ?Sized>(store: &S) -> SearchHistory {
    let raw = match store.get(keys::SEARCH_HISTORY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SearchHistory::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read search history");
            return SearchHistory::default();
        }
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
        Ok(entries) => SearchHistory::from_entries(entries),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding corrupt search history");
            SearchHistory::default()
        }
    }
}

pub fn save_history<S: LocalStore + ?Sized>(store: &S, history: &SearchHistory) -> Result<()> {
    let json = serde_json::to_string(history).map_err(|e| {
        DashboardError::Internal(anyhow::anyhow!("Failed to serialize search history: {}", e))
    })?;
    store.set(keys::SEARCH_HISTORY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Dark);

        store.set(keys::THEME, "neon").unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);

        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_corrupt_history_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(keys::SEARCH_HISTORY, "{not json").unwrap();
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_history_round_trip() {
        let store = MemoryStore::new();
        let mut history = SearchHistory::default();
        history.record(HistoryEntry {
            username: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar: "https://avatars.example/octocat".to_string(),
            timestamp: 1,
        });

        save_history(&store, &history).unwrap();
        assert_eq!(load_history(&store), history);
    }
}
