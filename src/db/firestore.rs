// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (identity, credentials, point/report counters)
//! - Reports (submission, owner-scoped and public queries)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Report, User};
use uuid::Uuid;

/// Points awarded for every submitted report.
pub const POINTS_PER_REPORT: u32 = 20;

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

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
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

    /// Get a user by their id.
    pub async fn get_user(&self, user_id: &Uuid) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by email (unique key for registration and login).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let mut matches: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(|q| q.for_all([q.field("email").eq(email)]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(matches.pop())
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user.id.to_string())
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Atomically award report points and bump the submitted-report counter.
    ///
    /// Both counters move in one combined field-transform commit against the
    /// user document, so concurrent submissions by the same user never
    /// interleave into a lost update and no reader can observe one counter
    /// without the other.
    ///
    /// Returns `false` without touching storage when the user does not exist
    /// (the caller treats the award as best-effort).
    pub async fn award_report_points(&self, user_id: &Uuid) -> Result<bool, AppError> {
        if self.get_user(user_id).await?.is_none() {
            return Ok(false);
        }

        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user_id.to_string())
            .transforms(|t| {
                t.fields([
                    t.field("points").increment(POINTS_PER_REPORT as i64),
                    t.field("reports_submitted").increment(1_i64),
                ])
            })
            .only_transform()
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add increment to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        tracing::debug!(user_id = %user_id, points = POINTS_PER_REPORT, "Report points awarded");

        Ok(true)
    }

    // ─── Report Operations ───────────────────────────────────────

    /// Store a new report.
    pub async fn create_report(&self, report: &Report) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::REPORTS)
            .document_id(report.id.to_string())
            .object(report)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get all reports submitted under a given user id, in submission order.
    ///
    /// The argument is matched against the stored (denormalized) `user_id`
    /// string; no attempt is made to resolve it to a live user.
    pub async fn get_reports_for_user(&self, user_id: &str) -> Result<Vec<Report>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::REPORTS)
            .filter(|q| q.for_all([q.field("user_id").eq(user_id)]))
            .order_by([(
                "submitted_at",
                firestore::FirestoreQueryDirection::Ascending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all publicly visible active reports.
    ///
    /// No pagination: feed sizes are expected to stay small for a single
    /// municipality.
    pub async fn get_public_reports(&self) -> Result<Vec<Report>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::REPORTS)
            .filter(|q| {
                q.for_all([
                    q.field("public").eq(true),
                    q.field("status").eq(crate::models::report::STATUS_ACTIVE),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
