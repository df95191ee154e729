//! User model for storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile stored in Firestore.
///
/// The uuid (string form) is also the document ID. The password hash is an
/// Argon2id PHC string and never leaves the storage layer; response view
/// types in the routes module control what reaches clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Assigned at registration, immutable
    pub id: Uuid,
    /// Display name (mutable via profile update)
    pub name: String,
    /// Unique across all users, immutable after creation
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
    /// Registration latitude, if shared
    pub latitude: Option<f64>,
    /// Registration longitude, if shared
    pub longitude: Option<f64>,
    /// Profile photo as an opaque base64 blob (mutable)
    pub photo: Option<String>,
    /// Gamification point balance; increases by 20 per accepted report
    #[serde(default)]
    pub points: u32,
    /// Number of submitted reports; moves in lockstep with `points`
    #[serde(default)]
    pub reports_submitted: u32,
    /// Achievement tags (append-only)
    #[serde(default)]
    pub achievements: Vec<String>,
    /// When the user registered (RFC3339)
    pub created_at: String,
}

impl User {
    /// Build a fresh user record at registration time.
    ///
    /// Counters start at zero; `created_at` is the current server time.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
        photo: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            latitude,
            longitude,
            photo,
            points: 0,
            reports_submitted: 0,
            achievements: Vec::new(),
            created_at: crate::time_utils::now_rfc3339(),
        }
    }
}
