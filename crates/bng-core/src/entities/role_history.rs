//! Role history entries - immutable, time-bounded audit records
//!
//! History rows are append-only and deliberately not foreign-keyed to the live
//! row's lifetime: the live row is deleted on removal while its history must
//! persist. For a given slot the entries form a sequence of non-overlapping
//! intervals, at most one of which is open (`end_date` null).

use chrono::{DateTime, Utc};

use crate::value_objects::{
    ChapterId, ChapterRoleType, MemberId, RoleAction, ZoneId, ZoneRoleType,
};

/// Audit record for a chapter role assignment's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRoleHistoryEntry {
    pub id: i64,
    /// Id of the live row this interval was opened for (the live row may no
    /// longer exist)
    pub role_id: i64,
    pub member_id: MemberId,
    pub chapter_id: ChapterId,
    pub role_type: ChapterRoleType,
    pub action: RoleAction,
    pub performed_by_id: Option<MemberId>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Audit record for a zone role assignment's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRoleHistoryEntry {
    pub id: i64,
    pub role_id: i64,
    pub member_id: MemberId,
    pub zone_id: ZoneId,
    pub role_type: ZoneRoleType,
    pub action: RoleAction,
    pub performed_by_id: Option<MemberId>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl ChapterRoleHistoryEntry {
    /// Whether this interval is still open (the role is currently held).
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

impl ZoneRoleHistoryEntry {
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}
