//! Zone database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use bng_core::entities::Zone;
use bng_core::value_objects::ZoneId;

/// Database model for the zones table
#[derive(Debug, Clone, FromRow)]
pub struct ZoneModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ZoneModel> for Zone {
    fn from(model: ZoneModel) -> Self {
        Self {
            id: ZoneId::new(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
