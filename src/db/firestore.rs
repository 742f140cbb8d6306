// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (create, lookup, list)
//! - Exercises (create, per-user log queries)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Exercise, User};
use chrono::NaiveDate;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing
        // a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Store a new user.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List all users, unfiltered and unpaginated.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Store a new exercise record.
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::EXERCISES)
            .document_id(&exercise.id)
            .object(exercise)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get a user's exercises, optionally bounded by an inclusive date
    /// range and truncated to `limit` entries.
    ///
    /// Dates are stored as `YYYY-MM-DD` strings, so lexicographic bounds
    /// match calendar order. Results are sorted by date ascending.
    pub async fn get_exercises_for_user(
        &self,
        user_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<u32>,
    ) -> Result<Vec<Exercise>, AppError> {
        let user_id = user_id.to_string();
        let from = from.map(|d| d.to_string());
        let to = to.map(|d| d.to_string());

        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .filter(move |q| {
                q.for_all([
                    q.field("user_id").eq(user_id.clone()),
                    from.clone()
                        .and_then(|d| q.field("date").greater_than_or_equal(d)),
                    to.clone()
                        .and_then(|d| q.field("date").less_than_or_equal(d)),
                ])
            })
            .order_by([("date", firestore::FirestoreQueryDirection::Ascending)]);

        let query = if let Some(limit) = limit {
            query.limit(limit)
        } else {
            query
        };

        query
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
