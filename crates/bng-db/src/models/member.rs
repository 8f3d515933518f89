//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use bng_core::entities::Member;
use bng_core::value_objects::{ChapterId, MemberId};

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub chapter_id: Option<i64>,
    pub joined_at: DateTime<Utc>,
}

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Self {
            id: MemberId::new(model.id),
            name: model.name,
            email: model.email,
            chapter_id: model.chapter_id.map(ChapterId::new),
            joined_at: model.joined_at,
        }
    }
}
