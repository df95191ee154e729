// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recicla Contigo API Server
//!
//! Backend for the Ventanilla municipal recycling app: citizens report
//! environmental incidents with photos and locations, earn points, and
//! browse the public feeds and reference catalogs.

use recicla_contigo::{config::Config, db::FirestoreDb, services::CatalogService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Recicla Contigo API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Load the static catalog (incentives, news, education, ranking, terms)
    tracing::info!(path = %config.catalog_path, "Loading static catalog");
    let catalog =
        CatalogService::load_from_file(&config.catalog_path).expect("Failed to load catalog");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        catalog,
    });

    // Build router
    let app = recicla_contigo::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recicla_contigo=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
