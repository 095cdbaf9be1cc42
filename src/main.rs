// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GitHub Stats Dashboard
//!
//! Terminal front-end for the stats backend: look up a user or
//! organization, compare two users, and revisit recent searches.

use std::io::{IsTerminal, Write};

use github_stats_dashboard::{
    config::Config,
    controller::{LookupTarget, CLEAR_HISTORY_PROMPT},
    models::{ComparisonPayload, UserStatsPayload, ViewMode},
    services::{HttpStatsApi, StatsApi},
    storage::FileStore,
    terminal::{command::HELP_TEXT, Command, TerminalExport, TerminalSurface},
    ControllerSettings, PendingLookup, RequestToken, ViewController,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A backend response travelling back to the event loop.
enum Resolved {
    Single(RequestToken, github_stats_dashboard::Result<UserStatsPayload>),
    Compare(RequestToken, github_stats_dashboard::Result<ComparisonPayload>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_logging(config.log_json);
    tracing::info!(api = %config.api_base_url, "Starting GitHub Stats Dashboard");

    let api = HttpStatsApi::new(&config.api_base_url);
    match api.health().await {
        Ok(health) if health.is_healthy() => {
            tracing::info!(service = %health.service, version = %health.version, "Backend healthy")
        }
        Ok(health) => tracing::warn!(status = %health.status, "Backend reports degraded health"),
        Err(e) => tracing::warn!(error = %e, "Backend health check failed"),
    }

    let store = FileStore::new(&config.state_dir);
    tracing::info!(path = %store.path().display(), "Using local storage");
    let mut controller = ViewController::new(store, ControllerSettings::from_config(&config));

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut surface = TerminalSurface::new(std::io::stdout(), color);
    let mut export = TerminalExport::new(std::io::stdout(), config.state_dir.join("prints"));

    let (tx, mut rx) = mpsc::unbounded_channel::<Resolved>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut awaiting_confirm = false;

    // Arguments are treated as the first prompt line, e.g. `lookup octocat`.
    let initial: Vec<String> = std::env::args().skip(1).collect();
    let mut queued = (!initial.is_empty()).then(|| initial.join(" "));

    redraw(&mut controller, &mut surface, false);

    loop {
        let line = if let Some(line) = queued.take() {
            Some(line)
        } else {
            let deadline = controller.banner_deadline();
            let banner_timer = async move {
                match deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => Some(line),
                    None => break,
                },
                Some(resolved) = rx.recv() => {
                    let outcome = match resolved {
                        Resolved::Single(token, result) => controller.complete_single_lookup(token, result),
                        Resolved::Compare(token, result) => controller.complete_comparison(token, result),
                    };
                    tracing::debug!(outcome = ?outcome, "Lookup resolved");
                    None
                }
                _ = banner_timer => {
                    controller.dismiss_expired_banner(std::time::Instant::now());
                    None
                }
            }
        };

        let Some(line) = line else {
            redraw(&mut controller, &mut surface, awaiting_confirm);
            continue;
        };

        if awaiting_confirm {
            awaiting_confirm = false;
            let answer = line.trim().to_ascii_lowercase();
            controller.clear_history(|_| answer == "y" || answer == "yes");
            redraw(&mut controller, &mut surface, false);
            continue;
        }

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => {
                println!("{}", HELP_TEXT);
                prompt(&mut controller, false);
                continue;
            }
            Ok(Some(Command::ClearHistory)) => awaiting_confirm = true,
            Ok(Some(command)) => {
                handle(command, &mut controller, &mut export, &api, &tx);
            }
            Err(e) => {
                println!("{}", e);
                prompt(&mut controller, false);
                continue;
            }
        }
        redraw(&mut controller, &mut surface, awaiting_confirm);
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

/// Apply one prompt command to the controller.
fn handle<A>(
    command: Command,
    controller: &mut ViewController<FileStore>,
    export: &mut TerminalExport<std::io::Stdout>,
    api: &A,
    tx: &mpsc::UnboundedSender<Resolved>,
) where
    A: StatsApi + Clone + Send + Sync + 'static,
{
    let started = match command {
        Command::Lookup(username) => controller.begin_single_lookup(&username),
        Command::Compare(username1, username2) => {
            controller.begin_comparison(&username1, &username2)
        }
        Command::Select(index) => controller.select_history(index),
        Command::ToggleMode => {
            controller.toggle_mode();
            return;
        }
        Command::ToggleTheme => {
            controller.toggle_theme();
            return;
        }
        Command::History => {
            controller.load_history();
            return;
        }
        Command::Export(choice) => {
            if let Err(e) = controller.export_current_view(choice, export) {
                tracing::error!(error = %e, "Export failed");
            }
            return;
        }
        Command::ClearHistory | Command::Help | Command::Quit => return,
    };

    // Validation failures already raised the banner.
    if let Ok(pending) = started {
        spawn_lookup(api.clone(), pending, tx.clone());
    }
}

/// Run a lookup in the background and send the response back to the loop.
fn spawn_lookup<A>(api: A, pending: PendingLookup, tx: mpsc::UnboundedSender<Resolved>)
where
    A: StatsApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let resolved = match pending.target {
            LookupTarget::Single { username } => {
                Resolved::Single(pending.token, api.fetch_stats(&username).await)
            }
            LookupTarget::Compare {
                username1,
                username2,
            } => Resolved::Compare(
                pending.token,
                api.fetch_comparison(&username1, &username2).await,
            ),
        };
        // The receiver only goes away when the dashboard is closing.
        let _ = tx.send(resolved);
    });
}

fn redraw(
    controller: &mut ViewController<FileStore>,
    surface: &mut TerminalSurface<std::io::Stdout>,
    awaiting_confirm: bool,
) {
    if let Err(e) = controller.present(surface) {
        tracing::error!(error = %e, "Failed to draw page");
    }
    prompt(controller, awaiting_confirm);
}

fn prompt(controller: &mut ViewController<FileStore>, awaiting_confirm: bool) {
    let text = if awaiting_confirm {
        format!("{} [y/N] ", CLEAR_HISTORY_PROMPT)
    } else if controller.mode() == ViewMode::Single {
        format!("(try: lookup {}) > ", controller.next_placeholder_hint())
    } else {
        "> ".to_string()
    };

    if let Err(e) = write_prompt(&mut std::io::stdout(), &text) {
        tracing::debug!(error = %e, "Failed to write prompt");
    }
}

fn write_prompt<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Initialize logging on stderr, JSON or compact text.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("github_stats_dashboard=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
