// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored exercise record in Firestore.
///
/// `user_id` is a non-owning reference to a `User` document; existence is
/// checked at write time but not enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated UUID (also used as document ID)
    pub id: String,
    /// Owning user's ID
    pub user_id: String,
    /// What was done (e.g. "30 min run")
    pub description: String,
    /// How long it took, in whole units as supplied by the client
    pub duration: i64,
    /// Calendar day the exercise happened (stored as `YYYY-MM-DD`)
    pub date: NaiveDate,
}
