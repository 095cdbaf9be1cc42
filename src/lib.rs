// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GitHub Stats Dashboard: profile and repository statistics viewer.
//!
//! This crate provides the client-side view controller that talks to the
//! stats backend, renders its payloads into view-models and keeps the small
//! amount of locally persisted state (theme, recent searches).

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod terminal;
pub mod time_utils;
pub mod view;

pub use controller::{Completion, ControllerSettings, PendingLookup, RequestToken, ViewController};
pub use error::{DashboardError, Result};
