// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Static catalog models: incentives, news, education content, ranking and
//! the terms-and-conditions document.
//!
//! These are reference data with no persistence; the JSON file under `data/`
//! is the wire format, so field names stay in Spanish here.

use serde::{Deserialize, Serialize};

/// Complete catalog as loaded from `data/catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub incentivos: Vec<Incentive>,
    pub noticias: Vec<NewsItem>,
    pub educacion: Vec<EducationItem>,
    pub ranking: Vec<RankingEntry>,
    pub terminos: Terms,
}

/// A redeemable incentive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incentive {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub puntos_requeridos: u32,
    pub categoria: String,
}

/// A municipal news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub titulo: String,
    pub contenido: String,
    pub fecha: String,
    pub categoria: String,
}

/// Environmental-education content (video, article or plain information).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: u32,
    pub titulo: String,
    pub tipo: String,
    pub contenido: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion: Option<String>,
    pub categoria: String,
}

/// A community ranking entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub posicion: u32,
    pub nombre: String,
    pub puntos: u32,
}

/// Terms-and-conditions payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terms {
    pub app_name: String,
    pub version: String,
    pub propietarios: Vec<String>,
    pub desarrollador: String,
    pub fecha_creacion: String,
    pub descripcion: String,
    pub mision: String,
    pub vision: String,
    pub terminos: Vec<TermsSection>,
    pub contacto: Contact,
    pub politica_privacidad: String,
    pub licencia: String,
    pub derechos: String,
    pub agradecimientos: String,
}

/// One numbered section of the terms document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsSection {
    pub titulo: String,
    pub contenido: String,
}

/// Contact block of the terms document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub telefono: String,
    pub direccion: String,
}
