// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View controller: owns all page state and mediates between user actions,
//! the stats backend and local storage.
//!
//! Handles:
//! - Single-user lookups and two-user comparisons
//! - Mode and theme toggles
//! - Recent-search history (record, reload, clear, re-run)
//! - Error banner lifetime
//! - Export/print
//!
//! Lookups are split into `begin_*` (validate, mark loading, issue a token)
//! and `complete_*` (apply the response) so an event loop can keep several
//! requests in flight. Only the most recently issued token is applied; any
//! other response is dropped.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::models::{
    ComparisonPayload, HistoryEntry, SearchHistory, Theme, UserStatsPayload, ViewMode,
};
use crate::services::{ExportChoice, ExportSink, StatsApi};
use crate::storage::{self, keys, LocalStore};
use crate::time_utils::now_millis;
use crate::view::{
    BannerView, ComparisonView, HistoryView, PageView, Region, StatsView, Surface,
};

/// Prompt passed to the confirmation callback of [`ViewController::clear_history`].
pub const CLEAR_HISTORY_PROMPT: &str = "Clear the search history?";

/// Placeholder hints cycled while the username field is empty.
const EXAMPLE_USERS: [&str; 3] = ["octocat", "torvalds", "gaearon"];

/// Controller settings derived from [`Config`].
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub banner_timeout: Duration,
    /// Base URL handed out by the copy-link export
    pub page_url: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            banner_timeout: config.banner_timeout,
            page_url: config.page_url.clone(),
        }
    }
}

/// Sequence number of an issued lookup. Later lookups get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a lookup asks the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    Single {
        username: String,
    },
    Compare {
        username1: String,
        username2: String,
    },
}

/// A lookup that has been validated and is waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub token: RequestToken,
    pub target: LookupTarget,
}

/// What happened when a response was handed back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The payload is now on screen.
    Rendered,
    /// The request failed and the error banner is up.
    Failed,
    /// A newer lookup (or a mode switch) replaced this one; nothing changed.
    Superseded,
}

#[derive(Debug, Clone)]
struct Banner {
    message: String,
    expires_at: Instant,
}

/// Page state. Owned by the controller and only changed through its methods.
#[derive(Debug, Default)]
struct ViewState {
    mode: ViewMode,
    theme: Theme,
    loading: bool,
    banner: Option<Banner>,
    stats: Option<StatsView>,
    comparison: Option<ComparisonView>,
    history: SearchHistory,
    export_visible: bool,
    scroll_target: Option<Region>,
    /// Last issued token value
    last_token: u64,
    /// The only lookup whose response will be applied
    pending: Option<PendingLookup>,
    /// Lookup currently on screen (for the share link)
    shown: Option<LookupTarget>,
    hint_index: usize,
}

/// The dashboard's view controller.
pub struct ViewController<S: LocalStore> {
    state: ViewState,
    store: S,
    settings: ControllerSettings,
}

impl<S: LocalStore> ViewController<S> {
    /// Create the controller, restoring theme and history from `store`.
    pub fn new(store: S, settings: ControllerSettings) -> Self {
        let mut controller = Self {
            state: ViewState {
                theme: storage::load_theme(&store),
                ..ViewState::default()
            },
            store,
            settings,
        };
        controller.load_history();

        tracing::debug!(
            theme = %controller.state.theme,
            history = controller.state.history.len(),
            "View controller ready"
        );
        controller
    }

    // ─── Single Lookup ───────────────────────────────────────────

    /// Validate a username and start a stats lookup.
    ///
    /// Hides any previous result and shows the loading indicator. An empty
    /// (after trimming) username raises the validation banner and returns
    /// an error without issuing anything.
    pub fn begin_single_lookup(&mut self, raw_username: &str) -> Result<PendingLookup> {
        let username = raw_username.trim();
        if username.is_empty() {
            return Err(self.reject(DashboardError::USERNAME_REQUIRED));
        }

        self.enter_mode(ViewMode::Single);
        self.state.stats = None;
        self.state.export_visible = false;

        let pending = self.issue(LookupTarget::Single {
            username: username.to_string(),
        });
        tracing::info!(username, token = pending.token.0, "Starting stats lookup");
        Ok(pending)
    }

    /// Apply the response of a stats lookup.
    pub fn complete_single_lookup(
        &mut self,
        token: RequestToken,
        result: Result<UserStatsPayload>,
    ) -> Completion {
        let Some(LookupTarget::Single { username }) = self.take_pending(token, false) else {
            tracing::debug!(token = token.0, "Dropping superseded stats response");
            return Completion::Superseded;
        };

        match result {
            Ok(payload) => {
                self.state.stats = Some(StatsView::from_payload(&payload));
                self.state.comparison = None;
                self.state.export_visible = true;
                self.state.scroll_target = Some(Region::Stats);

                let login = if payload.profile.login.trim().is_empty() {
                    username
                } else {
                    payload.profile.login.clone()
                };
                self.state.shown = Some(LookupTarget::Single {
                    username: login.clone(),
                });

                self.record_history(HistoryEntry {
                    name: payload.profile.display_name().to_string(),
                    avatar: payload.profile.avatar_url.clone(),
                    username: login,
                    timestamp: now_millis(),
                });
                Completion::Rendered
            }
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Stats lookup failed");
                self.show_banner(e.banner_message());
                Completion::Failed
            }
        }
    }

    /// Validate, fetch and render in one call.
    pub async fn submit_single_lookup<A: StatsApi>(
        &mut self,
        api: &A,
        raw_username: &str,
    ) -> Result<Completion> {
        let pending = self.begin_single_lookup(raw_username)?;
        let username = raw_username.trim();
        let result = api.fetch_stats(username).await;
        Ok(self.complete_single_lookup(pending.token, result))
    }

    // ─── Comparison ──────────────────────────────────────────────

    /// Validate two usernames and start a comparison.
    pub fn begin_comparison(
        &mut self,
        raw_username1: &str,
        raw_username2: &str,
    ) -> Result<PendingLookup> {
        let username1 = raw_username1.trim();
        let username2 = raw_username2.trim();
        if username1.is_empty() || username2.is_empty() {
            return Err(self.reject(DashboardError::BOTH_USERNAMES_REQUIRED));
        }

        self.enter_mode(ViewMode::Compare);
        self.state.comparison = None;

        let pending = self.issue(LookupTarget::Compare {
            username1: username1.to_string(),
            username2: username2.to_string(),
        });
        tracing::info!(
            username1,
            username2,
            token = pending.token.0,
            "Starting comparison"
        );
        Ok(pending)
    }

    /// Apply the response of a comparison. Never touches history.
    pub fn complete_comparison(
        &mut self,
        token: RequestToken,
        result: Result<ComparisonPayload>,
    ) -> Completion {
        let Some(target) = self.take_pending(token, true) else {
            tracing::debug!(token = token.0, "Dropping superseded comparison response");
            return Completion::Superseded;
        };

        match result {
            Ok(payload) => {
                self.state.comparison = Some(ComparisonView::from_payload(&payload));
                self.state.stats = None;
                self.state.scroll_target = Some(Region::Comparison);
                self.state.shown = Some(target);
                Completion::Rendered
            }
            Err(e) => {
                tracing::warn!(error = %e, "Comparison failed");
                self.show_banner(e.banner_message());
                Completion::Failed
            }
        }
    }

    /// Validate, fetch and render a comparison in one call.
    pub async fn submit_comparison<A: StatsApi>(
        &mut self,
        api: &A,
        raw_username1: &str,
        raw_username2: &str,
    ) -> Result<Completion> {
        let pending = self.begin_comparison(raw_username1, raw_username2)?;
        let result = api
            .fetch_comparison(raw_username1.trim(), raw_username2.trim())
            .await;
        Ok(self.complete_comparison(pending.token, result))
    }

    // ─── Mode & Theme ────────────────────────────────────────────

    /// Switch between single and compare mode.
    ///
    /// Both result regions are cleared either way, and any in-flight lookup
    /// is abandoned so it cannot reappear in the wrong mode.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.state.mode = self.state.mode.toggled();
        self.clear_results();

        if let Some(pending) = self.state.pending.take() {
            tracing::debug!(token = pending.token.0, "Mode switch abandoned lookup");
            self.state.loading = false;
        }

        tracing::debug!(mode = ?self.state.mode, "Mode toggled");
        self.state.mode
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        if let Err(e) = storage::save_theme(&self.store, self.state.theme) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
        self.state.theme
    }

    // ─── History ─────────────────────────────────────────────────

    /// Re-read the history from storage.
    pub fn load_history(&mut self) {
        self.state.history = storage::load_history(&self.store);
    }

    /// Record a lookup, persist the list and reload it.
    pub fn record_history(&mut self, entry: HistoryEntry) {
        self.state.history.record(entry);
        match storage::save_history(&self.store, &self.state.history) {
            Ok(()) => self.load_history(),
            Err(e) => tracing::warn!(error = %e, "Failed to persist search history"),
        }
    }

    /// Erase the history if `confirm` agrees. Returns whether it was cleared.
    pub fn clear_history<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CLEAR_HISTORY_PROMPT) {
            tracing::debug!("History clear declined");
            return false;
        }

        self.state.history.clear();
        if let Err(e) = self.store.remove(keys::SEARCH_HISTORY) {
            tracing::warn!(error = %e, "Failed to remove stored search history");
        }
        true
    }

    /// Re-run the lookup of a history entry.
    pub fn select_history(&mut self, index: usize) -> Result<PendingLookup> {
        let Some(username) = self.state.history.get(index).map(|e| e.username.clone()) else {
            return Err(self.reject("No such history entry"));
        };
        self.begin_single_lookup(&username)
    }

    // ─── Banner ──────────────────────────────────────────────────

    /// When the current banner should disappear.
    pub fn banner_deadline(&self) -> Option<Instant> {
        self.state.banner.as_ref().map(|b| b.expires_at)
    }

    /// Drop the banner once `now` has reached its deadline.
    pub fn dismiss_expired_banner(&mut self, now: Instant) -> bool {
        if self.banner_deadline().is_some_and(|deadline| now >= deadline) {
            self.state.banner = None;
            return true;
        }
        false
    }

    pub fn dismiss_banner(&mut self) {
        self.state.banner = None;
    }

    // ─── Export ──────────────────────────────────────────────────

    /// Print the page or copy its link.
    pub fn export_current_view<E: ExportSink>(
        &self,
        choice: ExportChoice,
        sink: &mut E,
    ) -> Result<()> {
        tracing::info!(choice = ?choice, "Exporting current view");
        match choice {
            ExportChoice::Print => sink.print(&self.render()),
            ExportChoice::CopyLink => sink.copy_to_clipboard(&self.share_url()),
        }
    }

    /// Page URL reproducing the lookup on screen.
    pub fn share_url(&self) -> String {
        let Ok(mut url) = reqwest::Url::parse(&self.settings.page_url) else {
            return self.settings.page_url.clone();
        };

        match &self.state.shown {
            Some(LookupTarget::Single { username }) => {
                url.query_pairs_mut().append_pair("user", username);
            }
            Some(LookupTarget::Compare {
                username1,
                username2,
            }) => {
                url.query_pairs_mut()
                    .append_pair("compare", &format!("{},{}", username1, username2));
            }
            None => {}
        }
        url.to_string()
    }

    // ─── Rendering ───────────────────────────────────────────────

    /// Describe the whole page. Pure: calling it changes nothing.
    pub fn render(&self) -> PageView {
        let state = &self.state;
        PageView {
            theme: state.theme,
            theme_icon: state.theme.icon(),
            mode: state.mode,
            toggle_label: state.mode.toggle_label(),
            toggle_icon: state.mode.toggle_icon(),
            single_form_visible: state.mode == ViewMode::Single,
            compare_form_visible: state.mode == ViewMode::Compare,
            loading: state.loading,
            banner: state.banner.as_ref().map(|b| BannerView {
                message: b.message.clone(),
            }),
            stats: state.stats.clone(),
            comparison: state.comparison.clone(),
            history: HistoryView::from_entries(state.history.entries()),
            export_visible: state.export_visible,
            scroll_target: state.scroll_target,
        }
    }

    /// Render and apply to `surface`.
    pub fn present<D: Surface>(&self, surface: &mut D) -> Result<()> {
        surface.apply(&self.render())
    }

    /// Next placeholder hint for an empty username field.
    pub fn next_placeholder_hint(&mut self) -> &'static str {
        let hint = EXAMPLE_USERS[self.state.hint_index % EXAMPLE_USERS.len()];
        self.state.hint_index = (self.state.hint_index + 1) % EXAMPLE_USERS.len();
        hint
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.state.banner.as_ref().map(|b| b.message.as_str())
    }

    pub fn stats(&self) -> Option<&StatsView> {
        self.state.stats.as_ref()
    }

    pub fn comparison(&self) -> Option<&ComparisonView> {
        self.state.comparison.as_ref()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.state.history
    }

    pub fn export_visible(&self) -> bool {
        self.state.export_visible
    }

    pub fn pending(&self) -> Option<&PendingLookup> {
        self.state.pending.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ─── Internals ───────────────────────────────────────────────

    /// Show a validation banner and build the matching error.
    fn reject(&mut self, message: &str) -> DashboardError {
        self.show_banner(message.to_string());
        DashboardError::Validation(message.to_string())
    }

    fn show_banner(&mut self, message: String) {
        self.state.banner = Some(Banner {
            message,
            expires_at: Instant::now() + self.settings.banner_timeout,
        });
    }

    /// Issue the next token, making it the only one that will be applied.
    fn issue(&mut self, target: LookupTarget) -> PendingLookup {
        self.state.last_token += 1;
        let pending = PendingLookup {
            token: RequestToken(self.state.last_token),
            target,
        };

        if let Some(previous) = self.state.pending.replace(pending.clone()) {
            tracing::debug!(
                superseded = previous.token.0,
                token = pending.token.0,
                "Lookup superseded by a newer one"
            );
        }
        self.state.banner = None;
        self.state.loading = true;
        self.state.scroll_target = None;
        pending
    }

    /// Take the pending lookup if `token` is it and it is of the expected
    /// kind. Clears the loading indicator when it does.
    fn take_pending(&mut self, token: RequestToken, comparison: bool) -> Option<LookupTarget> {
        let matches = self.state.pending.as_ref().is_some_and(|pending| {
            pending.token == token
                && matches!(pending.target, LookupTarget::Compare { .. }) == comparison
        });
        if !matches {
            return None;
        }

        self.state.loading = false;
        self.state.pending.take().map(|pending| pending.target)
    }

    /// Switch to `mode`, hiding both result regions if it changes.
    fn enter_mode(&mut self, mode: ViewMode) {
        if self.state.mode != mode {
            tracing::debug!(mode = ?mode, "Switching mode for lookup");
            self.state.mode = mode;
            self.clear_results();
        }
    }

    fn clear_results(&mut self) {
        self.state.stats = None;
        self.state.comparison = None;
        self.state.export_visible = false;
        self.state.scroll_target = None;
        self.state.shown = None;
    }
}
