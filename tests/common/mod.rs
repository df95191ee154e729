// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use recicla_contigo::config::Config;
use recicla_contigo::db::FirestoreDb;
use recicla_contigo::routes::create_router;
use recicla_contigo::services::CatalogService;
use recicla_contigo::AppState;
use std::sync::Arc;
use uuid::Uuid;

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

/// Create a test app with offline mock storage.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    build_app(config, db)
}

/// Create a test app backed by the Firestore emulator.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db().await;
    build_app(config, db)
}

#[allow(dead_code)]
fn build_app(config: Config, db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let catalog =
        CatalogService::load_from_file(&config.catalog_path).expect("Failed to load catalog");

    let state = Arc::new(AppState {
        config,
        db,
        catalog,
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT token for a user id.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &Uuid, signing_key: &[u8]) -> String {
    recicla_contigo::middleware::auth::create_jwt(user_id, signing_key)
        .expect("Failed to create JWT")
}
