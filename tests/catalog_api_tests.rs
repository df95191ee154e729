// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static catalog endpoint tests.
//!
//! Catalog endpoints never touch storage, so the whole surface is testable
//! against the offline mock database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;
use uuid::Uuid;

mod common;

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "GET {} should be 200", uri);

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_incentives_catalog() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/api/incentivos").await;

    let incentivos = body["incentivos"].as_array().unwrap();
    assert_eq!(incentivos.len(), 3);
    assert_eq!(incentivos[0]["nombre"], "Descuento en Supermercado");
    assert_eq!(incentivos[0]["puntos_requeridos"], 50);
    assert_eq!(incentivos[2]["categoria"], "Productos");
}

#[tokio::test]
async fn test_news_catalog() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/api/noticias").await;

    let noticias = body["noticias"].as_array().unwrap();
    assert!(!noticias.is_empty());
    assert!(noticias[0]["titulo"].is_string());
    assert!(noticias[0]["fecha"].is_string());
}

#[tokio::test]
async fn test_education_catalog() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/api/educacion").await;

    let contenido = body["contenido"].as_array().unwrap();
    assert!(!contenido.is_empty());

    // Only the video entry carries a URL; information entries omit the field
    assert_eq!(contenido[0]["tipo"], "video");
    assert!(contenido[0]["url"].is_string());
    assert!(contenido[1].get("url").is_none());
}

#[tokio::test]
async fn test_ranking_catalog() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/api/ranking").await;

    let ranking = body["ranking"].as_array().unwrap();
    assert_eq!(ranking[0]["posicion"], 1);
    assert!(ranking[0]["puntos"].as_u64().unwrap() >= ranking[1]["puntos"].as_u64().unwrap());
}

#[tokio::test]
async fn test_terms_payload() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/api/terminos").await;

    assert_eq!(body["app_name"], "VENTANILLA RECICLA CONTIGO");
    assert_eq!(body["desarrollador"], "Fernando Rufasto");

    let propietarios = body["propietarios"].as_array().unwrap();
    assert!(propietarios.contains(&serde_json::json!("Dayan Gallegos")));
    assert!(propietarios.contains(&serde_json::json!("Maria Ferrer")));

    assert!(!body["terminos"].as_array().unwrap().is_empty());
    assert!(body["contacto"]["email"].is_string());
    for field in [
        "version",
        "fecha_creacion",
        "descripcion",
        "mision",
        "vision",
        "politica_privacidad",
        "licencia",
        "derechos",
        "agradecimientos",
    ] {
        assert!(body[field].is_string(), "terms field {} missing", field);
    }
}

#[tokio::test]
async fn test_api_root_greeting() {
    let (app, _) = common::create_test_app();
    let body = get_json(app, "/").await;

    assert_eq!(
        body["message"],
        "VENTANILLA RECICLA CONTIGO API - Cuidando nuestro planeta"
    );
}

#[tokio::test]
async fn test_redeem_incentive_acknowledgment() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt(&Uuid::new_v4(), &state.config.jwt_signing_key);

    let payload = serde_json::json!({
        "incentivo_id": "1",
        "usuario_id": Uuid::new_v4().to_string(),
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/canjear")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["message"], "Incentivo canjeado exitosamente");
    assert!(body["fecha_canje"].is_string());
}

#[tokio::test]
async fn test_notification_stubs() {
    let (app, state) = common::create_test_app();
    let user_id = Uuid::new_v4();
    let token = common::create_test_jwt(&user_id, &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(&format!("/api/notificaciones/{}", user_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let notificaciones = body["notificaciones"].as_array().unwrap();
    assert_eq!(notificaciones.len(), 2);
    assert_eq!(notificaciones[0]["leida"], false);

    // Deletion is a stub acknowledgment
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/notificaciones/1")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
