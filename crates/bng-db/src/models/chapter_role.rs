//! Chapter role assignment and history database models
//!
//! Role types and actions are stored as text; parsing happens once here at the
//! database boundary. A row with an unrecognized role type indicates data
//! written outside the application and is surfaced as an internal error.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use bng_core::entities::{ChapterRoleAssignment, ChapterRoleHistoryEntry};
use bng_core::error::DomainError;
use bng_core::value_objects::{AssignmentId, ChapterId, MemberId};

/// Database model for the chapter_role_assignments table
#[derive(Debug, Clone, FromRow)]
pub struct ChapterRoleAssignmentModel {
    pub id: i64,
    pub member_id: i64,
    pub chapter_id: i64,
    pub role_type: String,
    pub assigned_at: DateTime<Utc>,
}

impl TryFrom<ChapterRoleAssignmentModel> for ChapterRoleAssignment {
    type Error = DomainError;

    fn try_from(model: ChapterRoleAssignmentModel) -> Result<Self, Self::Error> {
        let role_type = model
            .role_type
            .parse()
            .map_err(|_| unknown_role_type(&model.role_type))?;

        Ok(Self {
            id: AssignmentId::new(model.id),
            member_id: MemberId::new(model.member_id),
            chapter_id: ChapterId::new(model.chapter_id),
            role_type,
            assigned_at: model.assigned_at,
        })
    }
}

/// Database model for the chapter_role_history table
#[derive(Debug, Clone, FromRow)]
pub struct ChapterRoleHistoryModel {
    pub id: i64,
    pub role_id: i64,
    pub member_id: i64,
    pub chapter_id: i64,
    pub role_type: String,
    pub action: String,
    pub performed_by_id: Option<i64>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<ChapterRoleHistoryModel> for ChapterRoleHistoryEntry {
    type Error = DomainError;

    fn try_from(model: ChapterRoleHistoryModel) -> Result<Self, Self::Error> {
        let role_type = model
            .role_type
            .parse()
            .map_err(|_| unknown_role_type(&model.role_type))?;
        let action = model
            .action
            .parse()
            .map_err(|_| unknown_role_type(&model.action))?;

        Ok(Self {
            id: model.id,
            role_id: model.role_id,
            member_id: MemberId::new(model.member_id),
            chapter_id: ChapterId::new(model.chapter_id),
            role_type,
            action,
            performed_by_id: model.performed_by_id.map(MemberId::new),
            performed_by_name: model.performed_by_name,
            start_date: model.start_date,
            end_date: model.end_date,
        })
    }
}

pub(crate) fn unknown_role_type(value: &str) -> DomainError {
    DomainError::InternalError(format!("unrecognized role value in row: {value}"))
}
