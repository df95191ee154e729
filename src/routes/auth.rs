// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login routes.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::User;
use crate::services::password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/usuarios", post(register))
        .route("/api/login", post(login))
}

/// Registration payload.
#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "el nombre no puede estar vacío"))]
    pub name: String,
    #[validate(email(message = "email inválido"))]
    pub email: String,
    #[validate(length(min = 6, message = "la contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    #[serde(rename = "latitud")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(rename = "longitud")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(rename = "foto_perfil")]
    pub photo: Option<String>,
}

/// Login payload.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Short user view embedded in auth responses.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserSummary {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub puntos: u32,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            nombre: user.name.clone(),
            email: user.email.clone(),
            puntos: user.points,
        }
    }
}

/// Response for both register and login.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user_id: String,
    pub usuario: UserSummary,
}

/// Register a new user and issue a session token.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if state.db.find_user_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("El email ya está registrado".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)?;

    let user = User::new(
        payload.name,
        payload.email,
        password_hash,
        payload.latitude,
        payload.longitude,
        payload.photo,
    );

    state.db.upsert_user(&user).await?;

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(AuthResponse {
        message: "Usuario registrado exitosamente".to_string(),
        token,
        user_id: user.id.to_string(),
        usuario: UserSummary::from(&user),
    }))
}

/// Authenticate by email/password and issue a fresh session token.
///
/// Prior tokens stay valid until their own expiry; issuance does not rotate.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    // Unknown email and wrong password produce the same error
    let user = state
        .db
        .find_user_by_email(&payload.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    password::verify_password(&payload.password, &user.password_hash)?;

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Login exitoso".to_string(),
        token,
        user_id: user.id.to_string(),
        usuario: UserSummary::from(&user),
    }))
}
