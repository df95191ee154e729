// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static catalog loading service.
//!
//! Incentives, news, education content, ranking and the terms document are
//! versioned configuration, not logic: they live in a JSON file that is
//! loaded once at startup and served verbatim.

use crate::models::{Catalog, EducationItem, Incentive, NewsItem, RankingEntry, Terms};
use std::fs;
use std::path::Path;

/// Service holding the fixed reference catalogs.
#[derive(Clone, Debug)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        tracing::info!(
            incentives = catalog.incentivos.len(),
            news = catalog.noticias.len(),
            education = catalog.educacion.len(),
            "Loaded static catalog"
        );

        Ok(Self { catalog })
    }

    pub fn incentives(&self) -> &[Incentive] {
        &self.catalog.incentivos
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.catalog.noticias
    }

    pub fn education(&self) -> &[EducationItem] {
        &self.catalog.educacion
    }

    pub fn ranking(&self) -> &[RankingEntry] {
        &self.catalog.ranking
    }

    pub fn terms(&self) -> &Terms {
        &self.catalog.terminos
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),
}
