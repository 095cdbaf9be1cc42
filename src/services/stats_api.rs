// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stats backend client.
//!
//! Handles:
//! - Single-user stats lookup (`/api/stats/{username}`)
//! - Two-user comparison (`/api/compare/{user1}/{user2}`)
//! - Health probe (`/api/health`)
//!
//! Both lookup endpoints wrap their body in `{success, error?}`. A non-2xx
//! status and `success: false` are handled the same way: the server's
//! `error` string becomes the banner message, or a generic fallback when
//! there is none.

use std::future::Future;

use crate::error::{DashboardError, Result};
use crate::models::{ComparisonPayload, UserStatsPayload};
use serde::Deserialize;
use serde_json::Value;

/// The two read-only endpoints the dashboard depends on.
pub trait StatsApi {
    /// Fetch one user's stats payload.
    fn fetch_stats(&self, username: &str) -> impl Future<Output = Result<UserStatsPayload>> + Send;

    /// Fetch the comparison of two users.
    fn fetch_comparison(
        &self,
        username1: &str,
        username2: &str,
    ) -> impl Future<Output = Result<ComparisonPayload>> + Send;
}

/// HTTP client for the stats backend.
#[derive(Clone)]
pub struct HttpStatsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStatsApi {
    /// Create a client for the backend at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the backend health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Request(format!("Health check failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DashboardError::Request(format!(
                "Health check returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::Request(format!("Health check JSON parse error: {}", e)))
    }

    /// GET a `{success, error?}` envelope and return its body on success.
    async fn get_envelope(&self, url: &str, fallback: &str) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(url, error = %e, "Stats backend request failed");
            DashboardError::Request(fallback.to_string())
        })?;

        let status = response.status();
        let body: Option<Value> = match response.json().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(url, %status, error = %e, "Stats backend returned non-JSON body");
                None
            }
        };

        let succeeded = body
            .as_ref()
            .and_then(|b| b.get("success"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        match body {
            Some(body) if status.is_success() && succeeded => Ok(body),
            body => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.get("error"))
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.trim().is_empty())
                    .unwrap_or(fallback)
                    .to_string();
                tracing::info!(url, %status, error = %message, "Stats backend reported failure");
                Err(DashboardError::Request(message))
            }
        }
    }
}

impl StatsApi for HttpStatsApi {
    async fn fetch_stats(&self, username: &str) -> Result<UserStatsPayload> {
        let url = format!(
            "{}/api/stats/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        tracing::debug!(username, "Fetching user stats");

        let mut body = self
            .get_envelope(&url, DashboardError::LOOKUP_FALLBACK)
            .await?;
        let data = body.get_mut("data").map(Value::take).unwrap_or(Value::Null);

        serde_json::from_value(data).map_err(|e| {
            tracing::warn!(username, error = %e, "Malformed stats payload");
            DashboardError::Request(DashboardError::LOOKUP_FALLBACK.to_string())
        })
    }

    async fn fetch_comparison(
        &self,
        username1: &str,
        username2: &str,
    ) -> Result<ComparisonPayload> {
        let url = format!(
            "{}/api/compare/{}/{}",
            self.base_url,
            urlencoding::encode(username1),
            urlencoding::encode(username2)
        );
        tracing::debug!(username1, username2, "Fetching comparison");

        let body = self
            .get_envelope(&url, DashboardError::COMPARE_FALLBACK)
            .await?;

        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(username1, username2, error = %e, "Malformed comparison payload");
            DashboardError::Request(DashboardError::COMPARE_FALLBACK.to_string())
        })
    }
}

/// Health endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" || self.status == "ok"
    }
}
