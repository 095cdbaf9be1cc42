//! View layer: formatting, view-models and the display surface seam.
//!
//! The controller renders its state into a [`PageView`]; a [`Surface`]
//! applies it. Applying the same page twice must leave the display unchanged.

pub mod charts;
pub mod format;
pub mod render;

pub use charts::{chart_panels, ChartPanel, ChartSlot, CHART_SLOTS};
pub use format::{blog_link, format_number, format_percentage, BlogLink};
pub use render::{
    ComparisonView, CounterView, HistoryItem, HistoryView, LanguageRow, MetricRow, ProfileCard,
    ProfileHeader, RepoRow, StatsView, WinnerBadge,
};

use crate::error::Result;
use crate::models::{Theme, ViewMode};

/// Result regions that can be scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Stats,
    Comparison,
}

/// The transient error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub message: String,
}

/// Complete description of what the page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub theme: Theme,
    pub theme_icon: &'static str,
    pub mode: ViewMode,
    /// Names the mode the toggle switches to
    pub toggle_label: &'static str,
    pub toggle_icon: &'static str,
    pub single_form_visible: bool,
    pub compare_form_visible: bool,
    pub loading: bool,
    pub banner: Option<BannerView>,
    pub stats: Option<StatsView>,
    pub comparison: Option<ComparisonView>,
    pub history: Option<HistoryView>,
    pub export_visible: bool,
    pub scroll_target: Option<Region>,
}

/// A display the page can be applied to.
pub trait Surface {
    fn apply(&mut self, page: &PageView) -> Result<()>;
}
