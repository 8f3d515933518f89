//! Chapter database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use bng_core::entities::Chapter;
use bng_core::value_objects::{ChapterId, ZoneId};

/// Database model for the chapters table
#[derive(Debug, Clone, FromRow)]
pub struct ChapterModel {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChapterModel> for Chapter {
    fn from(model: ChapterModel) -> Self {
        Self {
            id: ChapterId::new(model.id),
            zone_id: ZoneId::new(model.zone_id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
