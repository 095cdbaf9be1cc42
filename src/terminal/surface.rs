//! Draws a [`PageView`] as text.
//!
//! Each apply redraws the whole page, so applying the same page twice
//! produces the same screen.

use std::io::Write;

use owo_colors::OwoColorize;

use crate::error::{DashboardError, Result};
use crate::models::{Theme, Winner};
use crate::view::{ComparisonView, HistoryView, PageView, StatsView, Surface};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy)]
enum Role {
    Heading,
    Accent,
    Muted,
    Error,
}

/// Theme-aware colouring. With colour off, text passes through unchanged.
#[derive(Debug, Clone, Copy)]
struct Painter {
    theme: Theme,
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        match (role, self.theme) {
            (Role::Heading, Theme::Dark) => text.bright_cyan().bold().to_string(),
            (Role::Heading, Theme::Light) => text.blue().bold().to_string(),
            (Role::Accent, Theme::Dark) => text.bright_yellow().to_string(),
            (Role::Accent, Theme::Light) => text.magenta().to_string(),
            (Role::Muted, _) => text.dimmed().to_string(),
            (Role::Error, _) => text.red().bold().to_string(),
        }
    }
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

/// Render the page as text, coloured for its theme when `color` is set.
pub fn render_page_text(page: &PageView, color: bool) -> String {
    let p = Painter {
        theme: page.theme,
        color,
    };
    let mut out = String::new();

    line(
        &mut out,
        format!(
            "{}   [{} {}]  [{} {}]",
            p.paint("GitHub Stats Dashboard", Role::Heading),
            page.theme_icon,
            page.theme,
            page.toggle_icon,
            page.toggle_label
        ),
    );

    if page.single_form_visible {
        line(&mut out, p.paint("Search: lookup <username>", Role::Muted));
    }
    if page.compare_form_visible {
        line(
            &mut out,
            p.paint("Compare: compare <user1> <user2>", Role::Muted),
        );
    }
    if page.loading {
        line(&mut out, p.paint("Loading…", Role::Accent));
    }
    if let Some(banner) = &page.banner {
        line(&mut out, p.paint(&format!("⚠ {}", banner.message), Role::Error));
    }

    if let Some(stats) = &page.stats {
        render_stats(&mut out, &p, stats);
    }
    if let Some(comparison) = &page.comparison {
        render_comparison(&mut out, &p, comparison);
    }
    if let Some(history) = &page.history {
        render_history(&mut out, &p, history);
    }
    if page.export_visible {
        line(&mut out, "");
        line(&mut out, p.paint("Export: export print | export link", Role::Muted));
    }

    out
}

fn render_stats(out: &mut String, p: &Painter, stats: &StatsView) {
    let profile = &stats.profile;
    line(out, "");
    line(
        out,
        format!(
            "{} {}",
            p.paint(&profile.name, Role::Heading),
            p.paint(&profile.handle, Role::Muted)
        ),
    );
    if let Some(bio) = &profile.bio {
        line(out, bio);
    }

    let details: Vec<String> = [
        profile.location.as_ref().map(|l| format!("📍 {}", l)),
        profile.company.as_ref().map(|c| format!("🏢 {}", c)),
        profile.since.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        line(out, p.paint(&details.join(" · "), Role::Muted));
    }
    if let Some(blog) = &profile.blog {
        line(out, format!("🔗 {}", blog.href));
    }

    for counters in [&stats.profile_counters, &stats.totals] {
        let cells: Vec<String> = counters
            .iter()
            .map(|c| format!("{} {}", c.label, p.paint(&c.value, Role::Accent)))
            .collect();
        line(out, cells.join(" | "));
    }

    let charts: Vec<_> = stats.visible_charts().collect();
    if !charts.is_empty() {
        line(out, "");
        line(out, p.paint("Charts", Role::Heading));
        for panel in charts {
            let bytes = panel.markup.as_deref().map_or(0, str::len);
            line(
                out,
                format!("  ▣ {} ({} bytes of chart markup)", panel.slot.title, bytes),
            );
        }
    }

    line(out, "");
    line(out, p.paint("Top repositories", Role::Heading));
    if let Some(message) = stats.repos_empty_message() {
        line(out, format!("  {}", p.paint(message, Role::Muted)));
    }
    for (i, repo) in stats.top_repos.iter().enumerate() {
        line(
            out,
            format!(
                "  {}. {}  ★ {}  ⑂ {}  · {}  · {}",
                i + 1,
                p.paint(&repo.name, Role::Accent),
                repo.stars,
                repo.forks,
                repo.language,
                repo.updated_at
            ),
        );
        if !repo.description.is_empty() {
            line(out, format!("     {}", repo.description));
        }
        if !repo.url.is_empty() {
            line(out, format!("     {}", p.paint(&repo.url, Role::Muted)));
        }
    }

    line(out, "");
    line(out, p.paint("Languages", Role::Heading));
    if let Some(message) = stats.languages_empty_message() {
        line(out, format!("  {}", p.paint(message, Role::Muted)));
    }
    for lang in &stats.languages {
        let filled = ((lang.bar_width / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(filled.min(BAR_WIDTH)),
            " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        line(
            out,
            format!(
                "  {:>2}. {:<16} {:>5} {:>7} [{}]",
                lang.rank, lang.language, lang.count, lang.percentage, bar
            ),
        );
    }
}

fn render_comparison(out: &mut String, p: &Painter, comparison: &ComparisonView) {
    line(out, "");
    line(
        out,
        format!(
            "{} {}  vs  {} {}",
            p.paint(&comparison.user1.name, Role::Heading),
            p.paint(&comparison.user1.handle, Role::Muted),
            p.paint(&comparison.user2.name, Role::Heading),
            p.paint(&comparison.user2.handle, Role::Muted)
        ),
    );

    for row in &comparison.rows {
        let mark = |side: Winner| {
            if row.badge.winner == side {
                format!(" {}", row.badge.glyph)
            } else {
                String::new()
            }
        };
        let tie = if row.badge.winner == Winner::Tie {
            format!("  {} {}", row.badge.glyph, row.badge.text)
        } else {
            String::new()
        };
        line(
            out,
            format!(
                "  {:<14}{:>10}{:<3} | {:>10}{:<3}{}",
                row.label,
                row.user1,
                mark(Winner::User1),
                row.user2,
                mark(Winner::User2),
                tie
            ),
        );
    }
}

fn render_history(out: &mut String, p: &Painter, history: &HistoryView) {
    line(out, "");
    line(out, p.paint("Recent searches (open <n>, clear)", Role::Heading));
    for item in &history.items {
        line(
            out,
            format!(
                "  {}. {} ({})  {}",
                item.index + 1,
                item.username,
                item.name,
                p.paint(&item.looked_up_at, Role::Muted)
            ),
        );
    }
}

/// Surface that redraws the page on a writer (normally stdout).
pub struct TerminalSurface<W: Write> {
    out: W,
    color: bool,
    clear_screen: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            clear_screen: color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn apply(&mut self, page: &PageView) -> Result<()> {
        let text = render_page_text(page, self.color);
        self.draw(&text)
            .map_err(|e| DashboardError::Internal(anyhow::anyhow!("Failed to draw page: {}", e)))
    }
}

impl<W: Write> TerminalSurface<W> {
    fn draw(&mut self, text: &str) -> std::io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}
