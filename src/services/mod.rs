// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend client and export plumbing.

pub mod export;
pub mod stats_api;

pub use export::{ExportChoice, ExportSink};
pub use stats_api::{HealthStatus, HttpStatsApi, StatsApi};
