//! Chapter entity - base organizational unit, belongs to exactly one zone

use chrono::{DateTime, Utc};

use crate::value_objects::{ChapterId, ZoneId};

/// Chapter entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: ChapterId,
    pub zone_id: ZoneId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(id: ChapterId, zone_id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            zone_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
