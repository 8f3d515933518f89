//! Member entity - an identity that can hold role assignments

use chrono::{DateTime, Utc};

use crate::value_objects::{ChapterId, MemberId};

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: Option<String>,
    /// Home chapter; null for identities not attached to any chapter
    pub chapter_id: Option<ChapterId>,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, chapter_id: Option<ChapterId>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            chapter_id,
            joined_at: Utc::now(),
        }
    }

    /// Whether this member belongs to a home chapter.
    #[inline]
    #[must_use]
    pub fn has_home_chapter(&self) -> bool {
        self.chapter_id.is_some()
    }
}
