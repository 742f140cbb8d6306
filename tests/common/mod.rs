// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use exercise_tracker::config::Config;
use exercise_tracker::db::FirestoreDb;
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with an offline mock database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        db: test_db_offline(),
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by the Firestore emulator.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        db: test_db().await,
    });

    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}

/// Generate a username unique to this test run.
#[allow(dead_code)]
pub fn unique_username(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}
