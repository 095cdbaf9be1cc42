//! Comparison payload returned by `GET /api/compare/{user1}/{user2}`.

use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Two profiles plus per-metric winner annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonPayload {
    pub user1: ComparedUser,
    pub user2: ComparedUser,
    pub comparison: MetricTable,
}

impl ComparisonPayload {
    pub fn metric(&self, metric: Metric) -> &MetricComparison {
        let table = &self.comparison;
        match metric {
            Metric::Followers => &table.followers,
            Metric::Repos => &table.repos,
            Metric::Stars => &table.stars,
            Metric::Forks => &table.forks,
            Metric::Languages => &table.languages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparedUser {
    pub profile: Profile,
}

/// The five compared metrics as sent by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricTable {
    #[serde(default)]
    pub followers: MetricComparison,
    #[serde(default)]
    pub repos: MetricComparison,
    #[serde(default)]
    pub stars: MetricComparison,
    #[serde(default)]
    pub forks: MetricComparison,
    /// Distinct language count
    #[serde(default)]
    pub languages: MetricComparison,
}

/// One metric for both users. The winner is decided by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    #[serde(default)]
    pub user1: u64,
    #[serde(default)]
    pub user2: u64,
    #[serde(default)]
    pub winner: Winner,
}

/// Which side has the larger value. Wire format: `1`, `2`, or `null`/absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub enum Winner {
    User1,
    User2,
    #[default]
    Tie,
}

impl From<Option<u8>> for Winner {
    fn from(value: Option<u8>) -> Self {
        match value {
            Some(1) => Winner::User1,
            Some(2) => Winner::User2,
            _ => Winner::Tie,
        }
    }
}

impl From<Winner> for Option<u8> {
    fn from(value: Winner) -> Self {
        match value {
            Winner::User1 => Some(1),
            Winner::User2 => Some(2),
            Winner::Tie => None,
        }
    }
}

/// Compared metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Followers,
    Repos,
    Stars,
    Forks,
    Languages,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Followers,
        Metric::Repos,
        Metric::Stars,
        Metric::Forks,
        Metric::Languages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Followers => "Followers",
            Metric::Repos => "Repositories",
            Metric::Stars => "Stars",
            Metric::Forks => "Forks",
            Metric::Languages => "Languages",
        }
    }
}
