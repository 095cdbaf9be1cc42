//! Stats payload returned by `GET /api/stats/{username}`.
//!
//! The backend does all aggregation and chart rendering; these types only
//! carry what it sends. Nothing here is cached between lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One user's profile, repository aggregates, languages and chart markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsPayload {
    pub profile: Profile,
    #[serde(default)]
    pub repositories: Repositories,
    #[serde(default)]
    pub languages: Languages,
    /// Chart key -> pre-rendered markup. Absent keys and `null` values both
    /// mean "no chart".
    #[serde(default)]
    pub charts: HashMap<String, Option<String>>,
}

impl UserStatsPayload {
    /// Markup for a chart key, treating blank markup as absent.
    pub fn chart(&self, key: &str) -> Option<&str> {
        self.charts
            .get(key)
            .and_then(|markup| markup.as_deref())
            .filter(|markup| !markup.trim().is_empty())
    }
}

/// Profile block of a user or organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    /// Display name (backend falls back to the login)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    /// Account creation date, already formatted by the backend
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub is_organization: bool,
    /// Member count, only sent for organizations
    #[serde(default)]
    pub public_members: Option<u64>,
}

impl Profile {
    /// Name to show, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// Repository aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repositories {
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub total_forks: u64,
    #[serde(default)]
    pub total_watchers: u64,
    /// Ordered by the backend (most starred first)
    #[serde(default)]
    pub top_repos: Vec<TopRepo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRepo {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Language breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Languages {
    /// Number of distinct languages across all repositories
    #[serde(default)]
    pub total_languages: u64,
    /// Ordered by the backend (most used first)
    #[serde(default)]
    pub languages: Vec<LanguageShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_payload() {
        let json = r#"{"profile": {"login": "octocat"}}"#;
        let payload: UserStatsPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.profile.login, "octocat");
        assert_eq!(payload.profile.display_name(), "octocat");
        assert!(!payload.profile.is_organization);
        assert!(payload.repositories.top_repos.is_empty());
        assert!(payload.charts.is_empty());
    }

    #[test]
    fn test_chart_lookup_treats_null_and_blank_as_absent() {
        let json = r#"{
            "profile": {"login": "octocat"},
            "charts": {"languages_pie": "<div>pie</div>", "top_repos_bar": null, "stars_vs_forks": "  "}
        }"#;
        let payload: UserStatsPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.chart("languages_pie"), Some("<div>pie</div>"));
        assert_eq!(payload.chart("top_repos_bar"), None);
        assert_eq!(payload.chart("stars_vs_forks"), None);
        assert_eq!(payload.chart("weekly_activity"), None);
    }

    #[test]
    fn test_display_name_ignores_blank_name() {
        let profile = Profile {
            login: "octocat".to_string(),
            name: Some("   ".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.display_name(), "octocat");
    }
}
