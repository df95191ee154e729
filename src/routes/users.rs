// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes (token required).

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::AppState;

/// Profile routes. The auth middleware is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/usuarios/{id}", get(get_user).put(update_profile))
}

/// Full profile view (everything except the password hash).
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub foto_perfil: Option<String>,
    pub puntos: u32,
    pub reportes_enviados: u32,
    pub logros: Vec<String>,
    pub fecha_registro: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            nombre: user.name,
            email: user.email,
            latitud: user.latitude,
            longitud: user.longitude,
            foto_perfil: user.photo,
            puntos: user.points,
            reportes_enviados: user.reports_submitted,
            logros: user.achievements,
            fecha_registro: user.created_at,
        }
    }
}

/// Partial profile update: only supplied fields change.
#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "foto_perfil")]
    pub photo: Option<String>,
}

fn parse_user_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("ID de usuario inválido".to_string()))
}

/// Get a user's full profile.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

    Ok(Json(ProfileResponse::from(user)))
}

/// Update name and/or profile photo; unspecified fields are left unchanged.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    if payload.name.is_none() && payload.photo.is_none() {
        return Err(AppError::BadRequest(
            "Debe indicar nombre o foto_perfil".to_string(),
        ));
    }

    let user_id = parse_user_id(&id)?;

    // Fetch-modify-write to preserve the untouched fields
    let mut user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(photo) = payload.photo {
        user.photo = Some(photo);
    }

    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(ProfileResponse::from(user)))
}
