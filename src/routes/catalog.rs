// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static catalog routes: incentives, news, education, ranking, terms and
//! the notification stubs.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::Result;
use crate::models::{EducationItem, Incentive, NewsItem, RankingEntry, Terms};
use crate::time_utils::{format_utc_rfc3339, now_rfc3339};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/incentivos", get(list_incentives))
        .route("/api/noticias", get(list_news))
        .route("/api/educacion", get(list_education))
        .route("/api/ranking", get(ranking))
        .route("/api/terminos", get(terms))
}

/// Redemption and notification stubs. The auth middleware is applied in
/// routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/canjear", post(redeem_incentive))
        .route(
            "/api/notificaciones/{id}",
            get(list_notifications).delete(delete_notification),
        )
}

// ─── Fixed Catalogs ──────────────────────────────────────────

#[derive(Serialize)]
pub struct IncentivesResponse {
    pub incentivos: Vec<Incentive>,
}

async fn list_incentives(State(state): State<Arc<AppState>>) -> Json<IncentivesResponse> {
    Json(IncentivesResponse {
        incentivos: state.catalog.incentives().to_vec(),
    })
}

#[derive(Serialize)]
pub struct NewsResponse {
    pub noticias: Vec<NewsItem>,
}

async fn list_news(State(state): State<Arc<AppState>>) -> Json<NewsResponse> {
    Json(NewsResponse {
        noticias: state.catalog.news().to_vec(),
    })
}

#[derive(Serialize)]
pub struct EducationResponse {
    pub contenido: Vec<EducationItem>,
}

async fn list_education(State(state): State<Arc<AppState>>) -> Json<EducationResponse> {
    Json(EducationResponse {
        contenido: state.catalog.education().to_vec(),
    })
}

#[derive(Serialize)]
pub struct RankingResponse {
    pub ranking: Vec<RankingEntry>,
}

async fn ranking(State(state): State<Arc<AppState>>) -> Json<RankingResponse> {
    Json(RankingResponse {
        ranking: state.catalog.ranking().to_vec(),
    })
}

async fn terms(State(state): State<Arc<AppState>>) -> Json<Terms> {
    Json(state.catalog.terms().clone())
}

// ─── Incentive Redemption ────────────────────────────────────

#[derive(Deserialize)]
pub struct RedeemRequest {
    pub incentivo_id: String,
    pub usuario_id: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RedeemResponse {
    pub message: String,
    pub fecha_canje: String,
}

/// Acknowledge a redemption. No balance is deducted; fulfillment is handled
/// out of band by the municipality.
async fn redeem_incentive(
    State(_state): State<Arc<AppState>>,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>> {
    tracing::info!(
        incentive_id = %payload.incentivo_id,
        user_id = %payload.usuario_id,
        "Incentive redeemed"
    );

    Ok(Json(RedeemResponse {
        message: "Incentivo canjeado exitosamente".to_string(),
        fecha_canje: now_rfc3339(),
    }))
}

// ─── Notification Stubs ──────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Notification {
    pub id: u32,
    pub mensaje: String,
    pub fecha: String,
    pub leida: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NotificationsResponse {
    pub notificaciones: Vec<Notification>,
}

/// Notification list stub with server-relative timestamps.
async fn list_notifications(
    State(_state): State<Arc<AppState>>,
    Path(_id): Path<String>,
) -> Json<NotificationsResponse> {
    let now = chrono::Utc::now();

    Json(NotificationsResponse {
        notificaciones: vec![
            Notification {
                id: 1,
                mensaje: "¡Felicitaciones! Has ganado puntos por tu último reporte".to_string(),
                fecha: format_utc_rfc3339(now - chrono::Duration::hours(2)),
                leida: false,
            },
            Notification {
                id: 2,
                mensaje: "Nueva campaña de reciclaje disponible en tu zona".to_string(),
                fecha: format_utc_rfc3339(now - chrono::Duration::days(1)),
                leida: false,
            },
        ],
    })
}

#[derive(Serialize)]
pub struct DeleteNotificationResponse {
    pub message: String,
}

/// Deletion stub; notifications are not persisted.
async fn delete_notification(Path(_id): Path<String>) -> Json<DeleteNotificationResponse> {
    Json(DeleteNotificationResponse {
        message: "Notificación eliminada".to_string(),
    })
}
