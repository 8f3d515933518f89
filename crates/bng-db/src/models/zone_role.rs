//! Zone role assignment and history database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use bng_core::entities::{ZoneRoleAssignment, ZoneRoleHistoryEntry};
use bng_core::error::DomainError;
use bng_core::value_objects::{AssignmentId, MemberId, ZoneId};

use super::chapter_role::unknown_role_type;

/// Database model for the zone_role_assignments table
#[derive(Debug, Clone, FromRow)]
pub struct ZoneRoleAssignmentModel {
    pub id: i64,
    pub member_id: i64,
    pub zone_id: i64,
    pub role_type: String,
    pub assigned_at: DateTime<Utc>,
}

impl TryFrom<ZoneRoleAssignmentModel> for ZoneRoleAssignment {
    type Error = DomainError;

    fn try_from(model: ZoneRoleAssignmentModel) -> Result<Self, Self::Error> {
        let role_type = model
            .role_type
            .parse()
            .map_err(|_| unknown_role_type(&model.role_type))?;

        Ok(Self {
            id: AssignmentId::new(model.id),
            member_id: MemberId::new(model.member_id),
            zone_id: ZoneId::new(model.zone_id),
            role_type,
            assigned_at: model.assigned_at,
        })
    }
}

/// Database model for the zone_role_history table
#[derive(Debug, Clone, FromRow)]
pub struct ZoneRoleHistoryModel {
    pub id: i64,
    pub role_id: i64,
    pub member_id: i64,
    pub zone_id: i64,
    pub role_type: String,
    pub action: String,
    pub performed_by_id: Option<i64>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<ZoneRoleHistoryModel> for ZoneRoleHistoryEntry {
    type Error = DomainError;

    fn try_from(model: ZoneRoleHistoryModel) -> Result<Self, Self::Error> {
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
            zone_id: ZoneId::new(model.zone_id),
            role_type,
            action,
            performed_by_id: model.performed_by_id.map(MemberId::new),
            performed_by_name: model.performed_by_name,
            start_date: model.start_date,
            end_date: model.end_date,
        })
    }
}
