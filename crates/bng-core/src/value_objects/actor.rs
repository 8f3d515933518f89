//! Actor - who performed a role change
//!
//! The performer is optional: migrations and other unauthenticated
//! administrative paths record a null performer id labelled "System".

use serde::{Deserialize, Serialize};

use super::ids::MemberId;

/// Label recorded when no performer is supplied.
pub const SYSTEM_ACTOR_NAME: &str = "System";

/// The identity responsible for a role mutation, as denormalized into history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub performed_by_id: Option<MemberId>,
    pub performed_by_name: String,
}

impl Actor {
    /// Actor for unauthenticated administrative paths.
    #[must_use]
    pub fn system() -> Self {
        Self {
            performed_by_id: None,
            performed_by_name: SYSTEM_ACTOR_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn member(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            performed_by_id: Some(id),
            performed_by_name: name.into(),
        }
    }

    /// Build an actor from optional request fields, defaulting to "System".
    #[must_use]
    pub fn from_parts(id: Option<MemberId>, name: Option<String>) -> Self {
        match (id, name) {
            (None, None) => Self::system(),
            (id, name) => Self {
                performed_by_id: id,
                performed_by_name: name.unwrap_or_else(|| SYSTEM_ACTOR_NAME.to_string()),
            },
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::system()
    }
}
