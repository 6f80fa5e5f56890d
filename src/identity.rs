//! Identity model — the signed-in principal record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identities are produced and owned by the external auth provider; this
//! crate only clones and forwards them. Provider-specific profile fields
//! that have no first-class column here travel in `metadata`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// An authenticated principal as reported by the session provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier, stable across sessions.
    pub id: Uuid,
    /// Primary email address, if the provider exposes one.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, if available.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Provider-defined profile attributes, passed through untouched.
    #[serde(default)]
    pub metadata: Value,
}

impl Identity {
    /// Build a bare identity carrying only an id.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self { id, email: None, display_name: None, avatar_url: None, metadata: Value::Null }
    }
}
