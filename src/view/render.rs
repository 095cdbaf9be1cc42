//! Pure payload -> view-model rendering.
//!
//! Nothing here touches a display surface, so every region can be checked
//! in unit tests.

use crate::models::{
    ComparisonPayload, HistoryEntry, Metric, Profile, TopRepo, UserStatsPayload, Winner,
};
use crate::time_utils::format_history_timestamp;
use crate::view::charts::{chart_panels, ChartPanel};
use crate::view::format::{blog_link, format_number, format_percentage, BlogLink};

pub const NO_REPOS_MESSAGE: &str = "No repositories to display";
pub const NO_LANGUAGES_MESSAGE: &str = "No language data available";
/// Shown in slots that do not apply to organizations.
pub const NOT_APPLICABLE: &str = "-";

/// A labelled count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub label: &'static str,
    pub value: String,
}

impl CounterView {
    fn count(label: &'static str, value: u64) -> Self {
        Self {
            label,
            value: format_number(value),
        }
    }

    fn not_applicable(label: &'static str) -> Self {
        Self {
            label,
            value: NOT_APPLICABLE.to_string(),
        }
    }
}

/// Profile block of the single-user view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub avatar_url: String,
    pub name: String,
    /// `@login`
    pub handle: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    /// `Since <date>`
    pub since: Option<String>,
    /// `None` hides the blog line entirely
    pub blog: Option<BlogLink>,
    pub is_organization: bool,
}

impl ProfileCard {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            avatar_url: profile.avatar_url.clone(),
            name: profile.display_name().to_string(),
            handle: format!("@{}", profile.login),
            bio: non_blank(profile.bio.as_deref()),
            location: non_blank(profile.location.as_deref()),
            company: non_blank(profile.company.as_deref()),
            since: non_blank(profile.created_at.as_deref()).map(|date| format!("Since {}", date)),
            blog: blog_link(profile.blog.as_deref()),
            is_organization: profile.is_organization,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Followers / following / repos / gists. Organizations show members in the
/// first slot and a dash in the following and gists slots.
fn profile_counters(profile: &Profile) -> [CounterView; 4] {
    if profile.is_organization {
        [
            CounterView::count("Members", profile.public_members.unwrap_or(0)),
            CounterView::not_applicable("Following"),
            CounterView::count("Repositories", profile.public_repos),
            CounterView::not_applicable("Gists"),
        ]
    } else {
        [
            CounterView::count("Followers", profile.followers),
            CounterView::count("Following", profile.following),
            CounterView::count("Repositories", profile.public_repos),
            CounterView::count("Gists", profile.public_gists),
        ]
    }
}

/// One entry of the top-repository list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stars: String,
    pub forks: String,
    pub language: String,
    pub updated_at: String,
}

impl RepoRow {
    fn from_repo(repo: &TopRepo) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: non_blank(repo.description.as_deref()).unwrap_or_default(),
            stars: format_number(repo.stars),
            forks: format_number(repo.forks),
            language: non_blank(repo.language.as_deref()).unwrap_or_else(|| "Unknown".to_string()),
            updated_at: repo.updated_at.clone().unwrap_or_default(),
        }
    }
}

/// One row of the language table.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRow {
    /// 1-based position
    pub rank: usize,
    pub language: String,
    pub count: u64,
    pub percentage: String,
    /// Progress bar width in percent, clamped to `0..=100`
    pub bar_width: f64,
}

/// Everything the single-user result region shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub profile: ProfileCard,
    pub profile_counters: [CounterView; 4],
    /// Stars / forks / watchers / distinct languages
    pub totals: [CounterView; 4],
    pub charts: Vec<ChartPanel>,
    pub top_repos: Vec<RepoRow>,
    pub languages: Vec<LanguageRow>,
}

impl StatsView {
    pub fn from_payload(payload: &UserStatsPayload) -> Self {
        let repos = &payload.repositories;

        Self {
            profile: ProfileCard::from_profile(&payload.profile),
            profile_counters: profile_counters(&payload.profile),
            totals: [
                CounterView::count("Stars", repos.total_stars),
                CounterView::count("Forks", repos.total_forks),
                CounterView::count("Watchers", repos.total_watchers),
                CounterView::count("Languages", payload.languages.total_languages),
            ],
            charts: chart_panels(payload),
            top_repos: repos.top_repos.iter().map(RepoRow::from_repo).collect(),
            languages: payload
                .languages
                .languages
                .iter()
                .enumerate()
                .map(|(i, lang)| LanguageRow {
                    rank: i + 1,
                    language: lang.language.clone(),
                    count: lang.count,
                    percentage: format_percentage(lang.percentage),
                    bar_width: lang.percentage.clamp(0.0, 100.0),
                })
                .collect(),
        }
    }

    pub fn visible_charts(&self) -> impl Iterator<Item = &ChartPanel> {
        self.charts.iter().filter(|panel| panel.is_visible())
    }

    /// Empty-state text for the repository list, if it is empty.
    pub fn repos_empty_message(&self) -> Option<&'static str> {
        self.top_repos.is_empty().then_some(NO_REPOS_MESSAGE)
    }

    /// Empty-state text for the language table, if it is empty.
    pub fn languages_empty_message(&self) -> Option<&'static str> {
        self.languages.is_empty().then_some(NO_LANGUAGES_MESSAGE)
    }
}

/// Avatar, name and handle of a compared user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    pub avatar_url: String,
    pub name: String,
    pub handle: String,
}

impl ProfileHeader {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            avatar_url: profile.avatar_url.clone(),
            name: profile.display_name().to_string(),
            handle: format!("@{}", profile.login),
        }
    }
}

/// Winner badge: crown on the winning side, handshake for a tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerBadge {
    pub winner: Winner,
    pub glyph: &'static str,
    pub text: &'static str,
    pub css_class: &'static str,
}

impl From<Winner> for WinnerBadge {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::User1 => Self {
                winner,
                glyph: "👑",
                text: "Winner",
                css_class: "user1-wins",
            },
            Winner::User2 => Self {
                winner,
                glyph: "👑",
                text: "Winner",
                css_class: "user2-wins",
            },
            Winner::Tie => Self {
                winner,
                glyph: "🤝",
                text: "Tie",
                css_class: "tie",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: &'static str,
    pub user1: String,
    pub user2: String,
    pub badge: WinnerBadge,
}

/// Everything the comparison region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonView {
    pub user1: ProfileHeader,
    pub user2: ProfileHeader,
    pub rows: Vec<MetricRow>,
}

impl ComparisonView {
    pub fn from_payload(payload: &ComparisonPayload) -> Self {
        Self {
            user1: ProfileHeader::from_profile(&payload.user1.profile),
            user2: ProfileHeader::from_profile(&payload.user2.profile),
            rows: Metric::ALL
                .iter()
                .map(|&metric| {
                    let values = payload.metric(metric);
                    MetricRow {
                        metric,
                        label: metric.label(),
                        user1: format_number(values.user1),
                        user2: format_number(values.user2),
                        badge: values.winner.into(),
                    }
                })
                .collect(),
        }
    }

    pub fn row(&self, metric: Metric) -> Option<&MetricRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Position in the stored list, used to re-run the lookup
    pub index: usize,
    pub username: String,
    pub name: String,
    pub avatar: String,
    pub looked_up_at: String,
}

/// The recent-search list. Only rendered when there is at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    pub items: Vec<HistoryItem>,
}

impl HistoryView {
    pub fn from_entries(entries: &[HistoryEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        Some(Self {
            items: entries
                .iter()
                .enumerate()
                .map(|(index, entry)| HistoryItem {
                    index,
                    username: entry.username.clone(),
                    name: entry.name.clone(),
                    avatar: entry.avatar.clone(),
                    looked_up_at: format_history_timestamp(entry.timestamp),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> UserStatsPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_user_profile_counters() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {
                "login": "torvalds", "name": "Linus Torvalds",
                "followers": 250000, "following": 0, "public_repos": 8, "public_gists": 0
            }
        })));

        assert_eq!(view.profile.handle, "@torvalds");
        assert_eq!(view.profile_counters[0].label, "Followers");
        assert_eq!(view.profile_counters[0].value, "250.0K");
        assert_eq!(view.profile_counters[1].value, "0");
        assert_eq!(view.profile_counters[2].value, "8");
    }

    #[test]
    fn test_organization_profile_counters() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {
                "login": "rust-lang", "is_organization": true,
                "followers": 99, "following": 3, "public_repos": 200, "public_gists": 4,
                "public_members": 1200
            }
        })));

        assert!(view.profile.is_organization);
        assert_eq!(view.profile_counters[0].label, "Members");
        assert_eq!(view.profile_counters[0].value, "1.2K");
        assert_eq!(view.profile_counters[1].value, NOT_APPLICABLE);
        assert_eq!(view.profile_counters[2].value, "200");
        assert_eq!(view.profile_counters[3].value, NOT_APPLICABLE);
    }

    #[test]
    fn test_organization_without_member_count_shows_zero() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {"login": "acme", "is_organization": true}
        })));
        assert_eq!(view.profile_counters[0].value, "0");
    }

    #[test]
    fn test_profile_card_optional_lines() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {
                "login": "octocat", "name": "The Octocat", "bio": "",
                "blog": "github.blog", "created_at": "25.01.2011", "location": "San Francisco"
            }
        })));

        assert_eq!(view.profile.name, "The Octocat");
        assert_eq!(view.profile.bio, None);
        assert_eq!(view.profile.since.as_deref(), Some("Since 25.01.2011"));
        assert_eq!(view.profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(view.profile.blog.unwrap().href, "https://github.blog");
    }

    #[test]
    fn test_blog_placeholder_hides_blog_line() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {"login": "octocat", "blog": "Нет"}
        })));

        assert_eq!(view.profile.blog, None);
    }

    #[test]
    fn test_empty_lists_have_empty_state_messages() {
        let view = StatsView::from_payload(&payload(json!({"profile": {"login": "ghost"}})));

        assert_eq!(view.repos_empty_message(), Some(NO_REPOS_MESSAGE));
        assert_eq!(view.languages_empty_message(), Some(NO_LANGUAGES_MESSAGE));
        assert_eq!(view.visible_charts().count(), 0);
    }

    #[test]
    fn test_language_rows() {
        let view = StatsView::from_payload(&payload(json!({
            "profile": {"login": "octocat"},
            "languages": {
                "total_languages": 2,
                "languages": [
                    {"language": "Rust", "count": 3, "percentage": 75.0},
                    {"language": "C", "count": 1, "percentage": 25.0}
                ]
            }
        })));

        assert_eq!(view.languages[0].rank, 1);
        assert_eq!(view.languages[0].percentage, "75%");
        assert_eq!(view.languages[1].language, "C");
        assert_eq!(view.languages[1].bar_width, 25.0);
        assert_eq!(view.totals[3].value, "2");
        assert_eq!(view.languages_empty_message(), None);
    }

    #[test]
    fn test_comparison_badges() {
        let payload: ComparisonPayload = serde_json::from_value(json!({
            "success": true,
            "user1": {"profile": {"login": "a", "name": "Alice"}},
            "user2": {"profile": {"login": "b"}},
            "comparison": {
                "followers": {"user1": 50, "user2": 80, "winner": 2},
                "repos": {"user1": 50, "user2": 50, "winner": null},
                "stars": {"user1": 1500, "user2": 10, "winner": 1},
                "forks": {"user1": 0, "user2": 0},
                "languages": {"user1": 4, "user2": 2, "winner": 1}
            }
        }))
        .unwrap();

        let view = ComparisonView::from_payload(&payload);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.user1.name, "Alice");
        assert_eq!(view.user2.handle, "@b");

        let followers = view.row(Metric::Followers).unwrap();
        assert_eq!(followers.badge.css_class, "user2-wins");
        assert_eq!(followers.badge.glyph, "👑");

        let repos = view.row(Metric::Repos).unwrap();
        assert_eq!(repos.badge.winner, Winner::Tie);
        assert_eq!(repos.badge.glyph, "🤝");

        assert_eq!(view.row(Metric::Stars).unwrap().user1, "1.5K");
    }

    #[test]
    fn test_history_view_hidden_when_empty() {
        assert_eq!(HistoryView::from_entries(&[]), None);

        let entries = vec![HistoryEntry {
            username: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar: String::new(),
            timestamp: 1_700_000_000_000,
        }];
        let view = HistoryView::from_entries(&entries).unwrap();
        assert_eq!(view.items[0].index, 0);
        assert_eq!(view.items[0].looked_up_at, "2023-11-14 22:13");
    }
}
