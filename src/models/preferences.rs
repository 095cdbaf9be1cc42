//! Display preferences: theme and which form is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Light/dark display flag. Stored as `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Icon affordance for the theme toggle: sun for light, moon for dark.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form/result region is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Single,
    Compare,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Single => ViewMode::Compare,
            ViewMode::Compare => ViewMode::Single,
        }
    }

    /// Toggle label: always names the mode the toggle switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Single => "Compare mode",
            ViewMode::Compare => "Single mode",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            ViewMode::Single => "⇄",
            ViewMode::Compare => "👤",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_storage_value() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(ViewMode::Single.toggle_label(), "Compare mode");
        assert_eq!(ViewMode::Compare.toggle_label(), "Single mode");
        assert_eq!(ViewMode::Single.toggled().toggled(), ViewMode::Single);
    }
}
