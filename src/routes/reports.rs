// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report submission, owner-scoped listing, and the public projections.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

use crate::db::firestore::POINTS_PER_REPORT;
use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::Report;
use crate::AppState;

/// Display name attached to reports whose owner cannot be resolved.
const ANONYMOUS_REPORTER: &str = "Usuario Anónimo";

const MAX_CONCURRENT_NAME_LOOKUPS: usize = 50;

/// Public, unauthenticated feeds.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reportes-publicos", get(list_public_reports))
        .route("/api/mapa-reportes", get(list_map_reports))
}

/// Submission and owner-scoped listing. The auth middleware is applied in
/// routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reportes", post(submit_report))
        .route("/api/reportes/{usuario_id}", get(list_user_reports))
}

// ─── Submission ──────────────────────────────────────────────

/// Report submission payload.
#[derive(Deserialize, Validate)]
pub struct SubmitReportRequest {
    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "la descripción no puede estar vacía"))]
    pub description: String,
    #[serde(rename = "foto_base64")]
    pub photo: String,
    #[serde(rename = "latitud")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "usuario_id")]
    pub user_id: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SubmitReportResponse {
    pub message: String,
    pub reporte_id: String,
    pub puntos_ganados: u32,
}

/// Submit a report and award points to the submitter.
///
/// The report is always created. The point award is best-effort: when the
/// supplied user id is malformed or does not resolve, the award is skipped
/// silently and the response still names the standard figure. Submission
/// availability wins over strict referential integrity here.
async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitReportRequest>,
) -> Result<Json<SubmitReportResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let report = Report::new(
        payload.description,
        payload.photo,
        payload.latitude,
        payload.longitude,
        payload.address,
        payload.user_id,
    );

    state.db.create_report(&report).await?;

    match Uuid::parse_str(&report.user_id) {
        Ok(user_id) => match state.db.award_report_points(&user_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(user_id = %report.user_id, "Submitter not found, skipping award");
            }
            Err(e) => {
                tracing::warn!(error = %e, user_id = %report.user_id, "Point award failed");
            }
        },
        Err(_) => {
            tracing::debug!(user_id = %report.user_id, "Malformed submitter id, skipping award");
        }
    }

    tracing::info!(report_id = %report.id, "Report submitted");

    Ok(Json(SubmitReportResponse {
        message: "Reporte enviado exitosamente y publicado para la comunidad".to_string(),
        reporte_id: report.id.to_string(),
        puntos_ganados: POINTS_PER_REPORT,
    }))
}

// ─── Owner-Scoped Listing ────────────────────────────────────

/// A user's own report, without the internal identifier.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OwnReportView {
    pub descripcion: String,
    pub foto_base64: String,
    pub latitud: f64,
    pub longitud: f64,
    pub direccion: Option<String>,
    pub usuario_id: String,
    pub fecha: String,
    pub estado: String,
    pub publico: bool,
}

impl From<Report> for OwnReportView {
    fn from(r: Report) -> Self {
        Self {
            descripcion: r.description,
            foto_base64: r.photo,
            latitud: r.latitude,
            longitud: r.longitude,
            direccion: r.address,
            usuario_id: r.user_id,
            fecha: r.submitted_at,
            estado: r.status,
            publico: r.public,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OwnReportsResponse {
    pub reportes: Vec<OwnReportView>,
}

/// List every report stored under the given user id, in submission order.
async fn list_user_reports(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<String>,
) -> Result<Json<OwnReportsResponse>> {
    let reports = state.db.get_reports_for_user(&usuario_id).await?;

    Ok(Json(OwnReportsResponse {
        reportes: reports.into_iter().map(OwnReportView::from).collect(),
    }))
}

// ─── Public Projections ──────────────────────────────────────

/// Public feed entry: full report plus the reporter's display name.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicReportView {
    pub id: String,
    pub descripcion: String,
    pub foto_base64: String,
    pub latitud: f64,
    pub longitud: f64,
    pub direccion: Option<String>,
    pub usuario_id: String,
    pub usuario_nombre: String,
    pub fecha: String,
    pub estado: String,
    pub publico: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PublicReportsResponse {
    pub reportes: Vec<PublicReportView>,
}

/// Map marker entry: location and context only, no photo payload.
///
/// Excluding the photo keeps the map response small; the full report stays
/// available through the public feed.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapReportView {
    pub id: String,
    pub latitud: f64,
    pub longitud: f64,
    pub descripcion: String,
    pub fecha: String,
    pub direccion: Option<String>,
    pub usuario_id: String,
    pub usuario_nombre: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapReportsResponse {
    pub reportes: Vec<MapReportView>,
}

/// Resolve the current display name for each distinct reporter id.
///
/// Lookups run concurrently with a bounded fan-out. A malformed id, a
/// missing user, or a per-lookup database error all degrade to the
/// placeholder name; the feed itself never fails on owner resolution.
async fn resolve_reporter_names(
    db: &FirestoreDb,
    reports: &[Report],
) -> HashMap<String, String> {
    let distinct_ids: HashSet<String> = reports.iter().map(|r| r.user_id.clone()).collect();

    stream::iter(distinct_ids)
        .map(|raw_id| {
            let db = db.clone();
            async move {
                let name = match Uuid::parse_str(&raw_id) {
                    Ok(user_id) => match db.get_user(&user_id).await {
                        Ok(Some(user)) => user.name,
                        Ok(None) => ANONYMOUS_REPORTER.to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, user_id = %raw_id, "Reporter lookup failed");
                            ANONYMOUS_REPORTER.to_string()
                        }
                    },
                    Err(_) => ANONYMOUS_REPORTER.to_string(),
                };
                (raw_id, name)
            }
        })
        .buffer_unordered(MAX_CONCURRENT_NAME_LOOKUPS)
        .collect()
        .await
}

/// Public feed: all active public reports with reporter names and photos.
async fn list_public_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PublicReportsResponse>> {
    let reports = state.db.get_public_reports().await?;
    let names = resolve_reporter_names(&state.db, &reports).await;

    let reportes = reports
        .into_iter()
        .map(|r| {
            let usuario_nombre = names
                .get(&r.user_id)
                .cloned()
                .unwrap_or_else(|| ANONYMOUS_REPORTER.to_string());
            PublicReportView {
                id: r.id.to_string(),
                descripcion: r.description,
                foto_base64: r.photo,
                latitud: r.latitude,
                longitud: r.longitude,
                direccion: r.address,
                usuario_id: r.user_id,
                usuario_nombre,
                fecha: r.submitted_at,
                estado: r.status,
                publico: r.public,
            }
        })
        .collect();

    Ok(Json(PublicReportsResponse { reportes }))
}

/// Map feed: same filter and name policy as the public feed, photo excluded.
async fn list_map_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MapReportsResponse>> {
    let reports = state.db.get_public_reports().await?;
    let names = resolve_reporter_names(&state.db, &reports).await;

    let reportes = reports
        .into_iter()
        .map(|r| {
            let usuario_nombre = names
                .get(&r.user_id)
                .cloned()
                .unwrap_or_else(|| ANONYMOUS_REPORTER.to_string());
            MapReportView {
                id: r.id.to_string(),
                latitud: r.latitude,
                longitud: r.longitude,
                descripcion: r.description,
                fecha: r.submitted_at,
                direccion: r.address,
                usuario_id: r.user_id,
                usuario_nombre,
            }
        })
        .collect();

    Ok(Json(MapReportsResponse { reportes }))
}
