// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise-Tracker: a small exercise-logging REST API
//!
//! This crate provides the backend API for creating users, recording
//! exercises against them, and querying per-user exercise logs.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
