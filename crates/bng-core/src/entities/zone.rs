//! Zone entity - regional grouping of chapters

use chrono::{DateTime, Utc};

use crate::value_objects::ZoneId;

/// Zone entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Zone {
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
