// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recicla Contigo: civic recycling-report backend for the Municipality of
//! Ventanilla.
//!
//! This crate provides the REST API for citizen registration, geolocated
//! environmental reports with point awards, and the public report feeds.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::CatalogService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub catalog: CatalogService,
}
