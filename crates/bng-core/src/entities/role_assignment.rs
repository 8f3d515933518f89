//! Live role assignments
//!
//! A live row is the current holder of a role slot. At most one live row
//! exists per (unit, roleType); the database enforces this with a uniqueness
//! constraint. A live row is always created and deleted together with its
//! matching history interval.

use chrono::{DateTime, Utc};

use crate::value_objects::{
    AssignmentId, ChapterId, ChapterRoleType, MemberId, ZoneId, ZoneRoleType,
};

/// Current holder of a chapter role slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRoleAssignment {
    pub id: AssignmentId,
    pub member_id: MemberId,
    pub chapter_id: ChapterId,
    pub role_type: ChapterRoleType,
    pub assigned_at: DateTime<Utc>,
}

/// Current holder of a zone role slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRoleAssignment {
    pub id: AssignmentId,
    pub member_id: MemberId,
    pub zone_id: ZoneId,
    pub role_type: ZoneRoleType,
    pub assigned_at: DateTime<Utc>,
}

/// Fields for creating a chapter role assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChapterRole {
    pub member_id: MemberId,
    pub chapter_id: ChapterId,
    pub role_type: ChapterRoleType,
}

/// Fields for creating a zone role assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewZoneRole {
    pub member_id: MemberId,
    pub zone_id: ZoneId,
    pub role_type: ZoneRoleType,
}
