// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard error types with a consistent banner message.

/// Dashboard error type. Every variant ends up in the same transient banner.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Required input missing; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// Non-success response or transport failure from the stats backend.
    #[error("{0}")]
    Request(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DashboardError {
    /// Fallback banner text when a stats lookup fails without a server message.
    pub const LOOKUP_FALLBACK: &'static str = "Failed to load data";
    /// Fallback banner text when a comparison fails without a server message.
    pub const COMPARE_FALLBACK: &'static str = "Failed to compare users";
    /// Validation text for an empty single lookup.
    pub const USERNAME_REQUIRED: &'static str = "Please enter a GitHub username";
    /// Validation text for an incomplete comparison form.
    pub const BOTH_USERNAMES_REQUIRED: &'static str = "Please enter both usernames";

    /// Text shown to the user in the error banner.
    pub fn banner_message(&self) -> String {
        match self {
            DashboardError::Validation(msg) | DashboardError::Request(msg) => msg.clone(),
            DashboardError::Storage(_) | DashboardError::Internal(_) => {
                Self::LOOKUP_FALLBACK.to_string()
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
