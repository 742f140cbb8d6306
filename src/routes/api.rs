// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for user and exercise-log management.

use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::routes::extract::FormOrJson;
use crate::time_utils::{format_date_readable, parse_date};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateUserRequest {
    username: String,
}

/// User response (also the list-users element).
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Create a new user.
///
/// Usernames are not required to be unique; every call creates a fresh
/// record with a generated ID.
async fn create_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(input): FormOrJson<CreateUserRequest>,
) -> Result<Json<UserResponse>> {
    let username = input.username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest(
            "Username must not be empty".to_string(),
        ));
    }

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
    };
    state.db.insert_user(&user).await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                username: u.username,
            })
            .collect(),
    ))
}

// ─── Exercises ───────────────────────────────────────────────

#[derive(Deserialize)]
struct AddExerciseRequest {
    description: String,
    duration: DurationInput,
    date: Option<String>,
}

/// A duration arrives as a JSON number or as a decimal string (HTML forms
/// always submit strings).
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationInput {
    Number(i64),
    Text(String),
}

fn parse_duration(input: &DurationInput) -> Result<i64> {
    let duration = match input {
        DurationInput::Number(n) => *n,
        DurationInput::Text(raw) => raw.trim().parse::<i64>().map_err(|_| {
            AppError::BadRequest(format!("Invalid duration '{}': expected an integer", raw.trim()))
        })?,
    };

    if duration <= 0 {
        return Err(AppError::BadRequest(
            "Duration must be a positive integer".to_string(),
        ));
    }

    Ok(duration)
}

/// Exercise response: the owning user plus the recorded exercise, with the
/// date rendered human-readable.
#[derive(Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: i64,
    pub description: String,
}

/// Record an exercise against a user.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    FormOrJson(input): FormOrJson<AddExerciseRequest>,
) -> Result<Json<ExerciseResponse>> {
    // Validate the input before touching the store, so malformed requests
    // fail the same way whether or not the user exists.
    let description = input.description.trim().to_string();
    if description.is_empty() {
        return Err(AppError::BadRequest(
            "Description must not be empty".to_string(),
        ));
    }
    let duration = parse_duration(&input.duration)?;
    // A blank date field from an HTML form means "not supplied".
    let date = match input.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_date(raw)?,
        _ => chrono::Utc::now().date_naive(),
    };

    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let exercise = Exercise {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        description,
        duration,
        date,
    };
    state.db.insert_exercise(&exercise).await?;

    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        date = %exercise.date,
        "Exercise recorded"
    );

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        date: format_date_readable(exercise.date),
        duration: exercise.duration,
        description: exercise.description,
    }))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    /// Lower date bound, inclusive (YYYY-MM-DD)
    from: Option<String>,
    /// Upper date bound, inclusive (YYYY-MM-DD)
    to: Option<String>,
    /// Maximum number of entries to return; non-positive means unbounded
    limit: Option<String>,
}

/// Logs response.
#[derive(Serialize)]
pub struct LogsResponse {
    pub id: String,
    pub username: String,
    /// Number of entries in `log` (after limiting), not the total match count
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    raw.map(|value| {
        parse_date(value).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid '{}' parameter: expected YYYY-MM-DD",
                name
            ))
        })
    })
    .transpose()
}

fn parse_limit(raw: Option<&str>) -> Result<Option<u32>> {
    let limit = match raw {
        Some(value) => value.trim().parse::<i64>().map_err(|_| {
            AppError::BadRequest("Invalid 'limit' parameter: expected an integer".to_string())
        })?,
        None => return Ok(None),
    };

    // Non-positive limits mean "unbounded", matching absent
    if limit > 0 {
        Ok(Some(limit.min(u32::MAX as i64) as u32))
    } else {
        Ok(None)
    }
}

/// Get a user's exercise log with optional date-range filtering.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogsResponse>> {
    let from = parse_bound(params.from.as_deref(), "from")?;
    let to = parse_bound(params.to.as_deref(), "to")?;
    let limit = parse_limit(params.limit.as_deref())?;

    tracing::debug!(
        user_id = %id,
        from = ?from,
        to = ?to,
        limit = ?limit,
        "Fetching exercise log"
    );

    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let exercises = state
        .db
        .get_exercises_for_user(&user.id, from, to, limit)
        .await?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: format_date_readable(e.date),
        })
        .collect();

    Ok(Json(LogsResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}
