//! Chart regions.
//!
//! Charts are opaque markup produced by the backend. The slot table below
//! is the only place that knows which charts exist; adding one is a new row.
//! A slot whose markup is absent is hidden, never shown empty.

use crate::models::UserStatsPayload;

/// One chart region: payload key and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlot {
    pub key: &'static str,
    pub title: &'static str,
}

/// Chart regions in display order.
pub const CHART_SLOTS: [ChartSlot; 8] = [
    ChartSlot {
        key: "languages_pie",
        title: "Languages",
    },
    ChartSlot {
        key: "top_repos_bar",
        title: "Top repositories by stars",
    },
    ChartSlot {
        key: "activity_timeline",
        title: "Repository updates (last year)",
    },
    ChartSlot {
        key: "stars_vs_forks",
        title: "Stars vs forks",
    },
    ChartSlot {
        key: "repos_by_year",
        title: "Repositories by year",
    },
    ChartSlot {
        key: "stars_forks_grouped",
        title: "Stars and forks per repository",
    },
    ChartSlot {
        key: "weekly_activity",
        title: "Activity by weekday",
    },
    ChartSlot {
        key: "repo_types_pie",
        title: "Repository types",
    },
];

/// A chart region with its markup, if the backend sent any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPanel {
    pub slot: ChartSlot,
    pub markup: Option<String>,
}

impl ChartPanel {
    pub fn is_visible(&self) -> bool {
        self.markup.is_some()
    }
}

/// One panel per slot, in slot order.
pub fn chart_panels(payload: &UserStatsPayload) -> Vec<ChartPanel> {
    CHART_SLOTS
        .iter()
        .map(|slot| ChartPanel {
            slot: *slot,
            markup: payload.chart(slot.key).map(str::to_string),
        })
        .collect()
}
