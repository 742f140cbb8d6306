//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated UUID (also used as document ID)
    pub id: String,
    /// Display name; not required to be unique
    pub username: String,
}
