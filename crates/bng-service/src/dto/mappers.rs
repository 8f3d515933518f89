//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use bng_core::entities::{
    ChapterRoleAssignment, ChapterRoleHistoryEntry, ZoneRoleAssignment, ZoneRoleHistoryEntry,
};
use bng_core::value_objects::AccessScope;

use super::responses::{
    AccessScopeResponse, ChapterRoleHistoryResponse, ChapterRoleResponse, ZoneRoleHistoryResponse,
    ZoneRoleResponse,
};

impl From<&ChapterRoleAssignment> for ChapterRoleResponse {
    fn from(assignment: &ChapterRoleAssignment) -> Self {
        Self {
            id: assignment.id.to_string(),
            member_id: assignment.member_id.to_string(),
            chapter_id: assignment.chapter_id.to_string(),
            role_type: assignment.role_type.as_str().to_string(),
            assigned_at: assignment.assigned_at,
        }
    }
}

impl From<ChapterRoleAssignment> for ChapterRoleResponse {
    fn from(assignment: ChapterRoleAssignment) -> Self {
        Self::from(&assignment)
    }
}

impl From<&ZoneRoleAssignment> for ZoneRoleResponse {
    fn from(assignment: &ZoneRoleAssignment) -> Self {
        Self {
            id: assignment.id.to_string(),
            member_id: assignment.member_id.to_string(),
            zone_id: assignment.zone_id.to_string(),
            role_type: assignment.role_type.as_str().to_string(),
            assigned_at: assignment.assigned_at,
        }
    }
}

impl From<ZoneRoleAssignment> for ZoneRoleResponse {
    fn from(assignment: ZoneRoleAssignment) -> Self {
        Self::from(&assignment)
    }
}

impl From<&ChapterRoleHistoryEntry> for ChapterRoleHistoryResponse {
    fn from(entry: &ChapterRoleHistoryEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            role_id: entry.role_id.to_string(),
            member_id: entry.member_id.to_string(),
            chapter_id: entry.chapter_id.to_string(),
            role_type: entry.role_type.as_str().to_string(),
            action: entry.action.as_str().to_string(),
            performed_by_id: entry.performed_by_id.map(|id| id.to_string()),
            performed_by_name: entry.performed_by_name.clone(),
            start_date: entry.start_date,
            end_date: entry.end_date,
        }
    }
}

impl From<&ZoneRoleHistoryEntry> for ZoneRoleHistoryResponse {
    fn from(entry: &ZoneRoleHistoryEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            role_id: entry.role_id.to_string(),
            member_id: entry.member_id.to_string(),
            zone_id: entry.zone_id.to_string(),
            role_type: entry.role_type.as_str().to_string(),
            action: entry.action.as_str().to_string(),
            performed_by_id: entry.performed_by_id.map(|id| id.to_string()),
            performed_by_name: entry.performed_by_name.clone(),
            start_date: entry.start_date,
            end_date: entry.end_date,
        }
    }
}

impl From<&AccessScope> for AccessScopeResponse {
    fn from(scope: &AccessScope) -> Self {
        Self {
            office_bearer: scope.office_bearer.iter().map(ToString::to_string).collect(),
            development_coordinator: scope
                .development_coordinator
                .iter()
                .map(ToString::to_string)
                .collect(),
            regional_director: scope
                .regional_director
                .iter()
                .map(ToString::to_string)
                .collect(),
            own_chapter: scope.own_chapter.map(|id| id.to_string()),
            primary_role: scope.primary_role(),
        }
    }
}
