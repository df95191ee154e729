// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Environmental report model for storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report lifecycle state produced by the submission path.
pub const STATUS_ACTIVE: &str = "activo";

/// Stored report record in Firestore.
///
/// `user_id` is a denormalized string copy of the submitter's id. It is NOT
/// validated at creation: a report may reference a user that never existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report ID (also used as document ID)
    pub id: Uuid,
    /// Free-text description of the incident
    pub description: String,
    /// Photo as an opaque base64 blob
    pub photo: String,
    /// Location latitude
    pub latitude: f64,
    /// Location longitude
    pub longitude: f64,
    /// Optional human-readable address
    pub address: Option<String>,
    /// Submitter id (denormalized, unvalidated)
    pub user_id: String,
    /// Server-assigned submission time (RFC3339)
    pub submitted_at: String,
    /// Lifecycle state; always `"activo"` at creation
    pub status: String,
    /// Visibility flag; always `true` at creation
    pub public: bool,
}

impl Report {
    /// Build a new report stamped active/public with the current server time.
    pub fn new(
        description: String,
        photo: String,
        latitude: f64,
        longitude: f64,
        address: Option<String>,
        user_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            photo,
            latitude,
            longitude,
            address,
            user_id,
            submitted_at: crate::time_utils::now_rfc3339(),
            status: STATUS_ACTIVE.to_string(),
            public: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_active_and_public() {
        let report = Report::new(
            "Acumulación de basura".to_string(),
            "aW1n".to_string(),
            -11.88,
            -77.16,
            Some("Av. Néstor Gambetta".to_string()),
            "some-user-id".to_string(),
        );

        assert_eq!(report.status, STATUS_ACTIVE);
        assert!(report.public);
        assert!(!report.submitted_at.is_empty());
    }
}
