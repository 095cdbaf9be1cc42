// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::Router;
use dashmap::DashMap;
use github_stats_dashboard::error::{DashboardError, Result};
use github_stats_dashboard::models::{ComparisonPayload, UserStatsPayload};
use github_stats_dashboard::services::StatsApi;
use github_stats_dashboard::storage::MemoryStore;
use github_stats_dashboard::{ControllerSettings, ViewController};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Every chart key the backend can send.
#[allow(dead_code)]
pub const ALL_CHART_KEYS: [&str; 8] = [
    "languages_pie",
    "top_repos_bar",
    "activity_timeline",
    "stars_vs_forks",
    "repos_by_year",
    "stars_forks_grouped",
    "weekly_activity",
    "repo_types_pie",
];

/// Controller over an in-memory store with default settings.
#[allow(dead_code)]
pub fn test_controller() -> ViewController<MemoryStore> {
    ViewController::new(MemoryStore::new(), ControllerSettings::default())
}

// ─── Payload fixtures ────────────────────────────────────────────

/// Full stats body for a user, with markup for the given chart keys.
#[allow(dead_code)]
pub fn stats_json(login: &str, charts: &[&str]) -> Value {
    let charts: serde_json::Map<String, Value> = ALL_CHART_KEYS
        .iter()
        .map(|key| {
            let markup = if charts.contains(key) {
                json!(format!("<div class=\"chart\" id=\"{}\"></div>", key))
            } else {
                Value::Null
            };
            (key.to_string(), markup)
        })
        .collect();

    json!({
        "profile": {
            "login": login,
            "name": format!("{} (test)", login),
            "avatar_url": format!("https://avatars.example/{}", login),
            "bio": "Test account",
            "location": "San Francisco",
            "company": "@github",
            "blog": "github.blog",
            "created_at": "January 25, 2011",
            "followers": 1260,
            "following": 9,
            "public_repos": 8,
            "public_gists": 8,
            "is_organization": false
        },
        "repositories": {
            "total_stars": 15_300,
            "total_forks": 1_500_000,
            "total_watchers": 999,
            "top_repos": [
                {
                    "name": "Spoon-Knife",
                    "url": "https://github.com/octocat/Spoon-Knife",
                    "description": "This repo is for demonstration purposes only.",
                    "stars": 12_000,
                    "forks": 140_000,
                    "language": "HTML",
                    "updated_at": "2024-03-01"
                },
                {
                    "name": "hello-worId",
                    "url": "https://github.com/octocat/hello-worId",
                    "stars": 3_300,
                    "forks": 900
                }
            ]
        },
        "languages": {
            "total_languages": 2,
            "languages": [
                {"language": "HTML", "count": 3, "percentage": 60.0},
                {"language": "Ruby", "count": 2, "percentage": 40.0}
            ]
        },
        "charts": charts
    })
}

#[allow(dead_code)]
pub fn stats_payload(login: &str, charts: &[&str]) -> UserStatsPayload {
    serde_json::from_value(stats_json(login, charts)).expect("valid stats fixture")
}

/// Stats body for an organization.
#[allow(dead_code)]
pub fn org_payload(login: &str, members: u64) -> UserStatsPayload {
    let mut body = stats_json(login, &[]);
    body["profile"]["is_organization"] = json!(true);
    body["profile"]["public_members"] = json!(members);
    serde_json::from_value(body).expect("valid org fixture")
}

/// Comparison body. `winners` lists followers, repos, stars, forks and
/// languages winners as sent on the wire (`1`, `2` or `null`).
#[allow(dead_code)]
pub fn comparison_json(login1: &str, login2: &str, winners: [Option<u8>; 5]) -> Value {
    let metric = |winner: Option<u8>| {
        let (a, b) = match winner {
            Some(1) => (200, 100),
            Some(2) => (100, 200),
            _ => (150, 150),
        };
        json!({"user1": a, "user2": b, "winner": winner})
    };

    json!({
        "success": true,
        "user1": {"profile": {"login": login1, "avatar_url": format!("https://avatars.example/{}", login1)}},
        "user2": {"profile": {"login": login2, "avatar_url": format!("https://avatars.example/{}", login2)}},
        "comparison": {
            "followers": metric(winners[0]),
            "repos": metric(winners[1]),
            "stars": metric(winners[2]),
            "forks": metric(winners[3]),
            "languages": metric(winners[4])
        }
    })
}

#[allow(dead_code)]
pub fn comparison_payload(login1: &str, login2: &str, winners: [Option<u8>; 5]) -> ComparisonPayload {
    serde_json::from_value(comparison_json(login1, login2, winners))
        .expect("valid comparison fixture")
}

// ─── In-process fake backend ─────────────────────────────────────

/// [`StatsApi`] answering from canned payloads and recording every call.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeApi {
    stats: DashMap<String, UserStatsPayload>,
    comparisons: DashMap<(String, String), ComparisonPayload>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, payload: UserStatsPayload) -> Self {
        self.stats.insert(payload.profile.login.clone(), payload);
        self
    }

    pub fn with_comparison(self, payload: ComparisonPayload) -> Self {
        let key = (
            payload.user1.profile.login.clone(),
            payload.user2.profile.login.clone(),
        );
        self.comparisons.insert(key, payload);
        self
    }

    /// Calls made so far, as `stats:<user>` or `compare:<a>:<b>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl StatsApi for FakeApi {
    fn fetch_stats(&self, username: &str) -> impl Future<Output = Result<UserStatsPayload>> + Send {
        self.calls.lock().unwrap().push(format!("stats:{}", username));
        let result = self
            .stats
            .get(username)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DashboardError::Request("User not found".to_string()));
        async move { result }
    }

    fn fetch_comparison(
        &self,
        username1: &str,
        username2: &str,
    ) -> impl Future<Output = Result<ComparisonPayload>> + Send {
        self.calls
            .lock()
            .unwrap()
            .push(format!("compare:{}:{}", username1, username2));
        let result = self
            .comparisons
            .get(&(username1.to_string(), username2.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DashboardError::Request("User not found".to_string()));
        async move { result }
    }
}

// ─── HTTP mock backend ───────────────────────────────────────────

/// Canned HTTP response: status, content type and body.
#[derive(Clone)]
#[allow(dead_code)]
pub struct MockResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

#[allow(dead_code)]
impl MockResponse {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
struct MockState {
    routes: DashMap<String, MockResponse>,
    hits: Mutex<Vec<String>>,
}

/// Stats backend served by axum on an ephemeral local port.
#[allow(dead_code)]
pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(respond)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer requests for `path` (as sent on the wire) with `response`.
    pub fn route(&self, path: &str, response: MockResponse) {
        self.state.routes.insert(path.to_string(), response);
    }

    /// Request paths received so far.
    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<Arc<MockState>>,
    uri: Uri,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let path = uri.path().to_string();
    state.hits.lock().unwrap().push(path.clone());

    match state.routes.get(&path) {
        Some(response) => (
            response.status,
            [(header::CONTENT_TYPE, response.content_type)],
            response.body.clone(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({"success": false, "error": "Not found"}).to_string(),
        ),
    }
}
