// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the dashboard.

pub mod comparison;
pub mod history;
pub mod preferences;
pub mod stats;

pub use comparison::{ComparedUser, ComparisonPayload, Metric, MetricComparison, MetricTable, Winner};
pub use history::{HistoryEntry, SearchHistory, HISTORY_LIMIT};
pub use preferences::{Theme, ViewMode};
pub use stats::{LanguageShare, Languages, Profile, Repositories, TopRepo, UserStatsPayload};
