//! Role assignment service
//!
//! Orchestrates assigning and removing chapter and zone roles. Slot
//! uniqueness itself is enforced by the repository layer; this service adds
//! existence checks, idempotent reassignment, and request-level validation.

use tracing::{info, instrument};

use bng_core::entities::{NewChapterRole, NewZoneRole};
use bng_core::value_objects::{Actor, AssignmentId, ChapterId, ChapterRoleType, ZoneId, ZoneRoleType};

use crate::dto::{
    AssignRoleRequest, ChapterRoleHistoryResponse, ChapterRoleResponse, RemovedRoleResponse,
    ZoneRoleHistoryResponse, ZoneRoleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role assignment service
pub struct RoleAssignmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleAssignmentService<'a> {
    /// Create a new RoleAssignmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assign a chapter role, replacing nothing: the slot must be free or
    /// already held by the same member (idempotent reassignment).
    #[instrument(skip(self, request), fields(role_type = %request.role_type))]
    pub async fn assign_chapter_role(
        &self,
        chapter_id: ChapterId,
        request: AssignRoleRequest,
    ) -> ServiceResult<ChapterRoleResponse> {
        let role_type: ChapterRoleType = request
            .role_type
            .parse()
            .map_err(|_| ServiceError::validation(format!("Unknown role type: {}", request.role_type)))?;

        if !self.ctx.chapter_repo().exists(chapter_id).await? {
            return Err(ServiceError::not_found("Chapter", chapter_id.to_string()));
        }

        let member_id = request.member_id();
        if !self.ctx.member_repo().exists(member_id).await? {
            return Err(ServiceError::not_found("Member", member_id.to_string()));
        }

        // Same member already in the slot: succeed without touching history
        if let Some(existing) = self
            .ctx
            .chapter_role_repo()
            .find_by_slot(chapter_id, role_type)
            .await?
        {
            if existing.member_id == member_id {
                return Ok(ChapterRoleResponse::from(&existing));
            }
            return Err(ServiceError::conflict(format!(
                "Role {role_type} is already held by member {}",
                existing.member_id
            )));
        }

        let actor = request.actor();
        let new_role = NewChapterRole {
            member_id,
            chapter_id,
            role_type,
        };
        let assignment = self.ctx.chapter_role_repo().assign(&new_role, &actor).await?;

        info!(
            assignment_id = %assignment.id,
            chapter_id = %chapter_id,
            member_id = %member_id,
            "Chapter role assigned"
        );

        Ok(ChapterRoleResponse::from(&assignment))
    }

    /// Remove a chapter role assignment by its ID
    #[instrument(skip(self, actor))]
    pub async fn remove_chapter_role(
        &self,
        chapter_id: ChapterId,
        assignment_id: AssignmentId,
        actor: Actor,
    ) -> ServiceResult<RemovedRoleResponse> {
        let assignment = self
            .ctx
            .chapter_role_repo()
            .find_by_id(assignment_id)
            .await?
            .filter(|a| a.chapter_id == chapter_id)
            .ok_or_else(|| ServiceError::not_found("Role assignment", assignment_id.to_string()))?;

        let removed_at = self
            .ctx
            .chapter_role_repo()
            .remove(&assignment, &actor)
            .await?;

        info!(
            assignment_id = %assignment_id,
            chapter_id = %chapter_id,
            performed_by = %actor.performed_by_name,
            "Chapter role removed"
        );

        Ok(RemovedRoleResponse { removed_at })
    }

    /// List live role assignments in a chapter
    #[instrument(skip(self))]
    pub async fn list_chapter_roles(
        &self,
        chapter_id: ChapterId,
    ) -> ServiceResult<Vec<ChapterRoleResponse>> {
        if !self.ctx.chapter_repo().exists(chapter_id).await? {
            return Err(ServiceError::not_found("Chapter", chapter_id.to_string()));
        }

        let assignments = self.ctx.chapter_role_repo().find_by_chapter(chapter_id).await?;
        Ok(assignments.iter().map(ChapterRoleResponse::from).collect())
    }

    /// List role history for a chapter, newest interval first
    #[instrument(skip(self))]
    pub async fn chapter_role_history(
        &self,
        chapter_id: ChapterId,
    ) -> ServiceResult<Vec<ChapterRoleHistoryResponse>> {
        if !self.ctx.chapter_repo().exists(chapter_id).await? {
            return Err(ServiceError::not_found("Chapter", chapter_id.to_string()));
        }

        let entries = self.ctx.chapter_role_repo().history_by_chapter(chapter_id).await?;
        Ok(entries.iter().map(ChapterRoleHistoryResponse::from).collect())
    }

    /// Assign a zone role, with the same slot semantics as chapter roles
    #[instrument(skip(self, request), fields(role_type = %request.role_type))]
    pub async fn assign_zone_role(
        &self,
        zone_id: ZoneId,
        request: AssignRoleRequest,
    ) -> ServiceResult<ZoneRoleResponse> {
        let role_type: ZoneRoleType = request
            .role_type
            .parse()
            .map_err(|_| ServiceError::validation(format!("Unknown role type: {}", request.role_type)))?;

        if !self.ctx.zone_repo().exists(zone_id).await? {
            return Err(ServiceError::not_found("Zone", zone_id.to_string()));
        }

        let member_id = request.member_id();
        if !self.ctx.member_repo().exists(member_id).await? {
            return Err(ServiceError::not_found("Member", member_id.to_string()));
        }

        if let Some(existing) = self
            .ctx
            .zone_role_repo()
            .find_by_slot(zone_id, role_type)
            .await?
        {
            if existing.member_id == member_id {
                return Ok(ZoneRoleResponse::from(&existing));
            }
            return Err(ServiceError::conflict(format!(
                "Role {role_type} is already held by member {}",
                existing.member_id
            )));
        }

        let actor = request.actor();
        let new_role = NewZoneRole {
            member_id,
            zone_id,
            role_type,
        };
        let assignment = self.ctx.zone_role_repo().assign(&new_role, &actor).await?;

        info!(
            assignment_id = %assignment.id,
            zone_id = %zone_id,
            member_id = %member_id,
            "Zone role assigned"
        );

        Ok(ZoneRoleResponse::from(&assignment))
    }

    /// Remove a zone role assignment by its ID
    #[instrument(skip(self, actor))]
    pub async fn remove_zone_role(
        &self,
        zone_id: ZoneId,
        assignment_id: AssignmentId,
        actor: Actor,
    ) -> ServiceResult<RemovedRoleResponse> {
        let assignment = self
            .ctx
            .zone_role_repo()
            .find_by_id(assignment_id)
            .await?
            .filter(|a| a.zone_id == zone_id)
            .ok_or_else(|| ServiceError::not_found("Role assignment", assignment_id.to_string()))?;

        let removed_at = self.ctx.zone_role_repo().remove(&assignment, &actor).await?;

        info!(
            assignment_id = %assignment_id,
            zone_id = %zone_id,
            performed_by = %actor.performed_by_name,
            "Zone role removed"
        );

        Ok(RemovedRoleResponse { removed_at })
    }

    /// List live role assignments in a zone
    #[instrument(skip(self))]
    pub async fn list_zone_roles(&self, zone_id: ZoneId) -> ServiceResult<Vec<ZoneRoleResponse>> {
        if !self.ctx.zone_repo().exists(zone_id).await? {
            return Err(ServiceError::not_found("Zone", zone_id.to_string()));
        }

        let assignments = self.ctx.zone_role_repo().find_by_zone(zone_id).await?;
        Ok(assignments.iter().map(ZoneRoleResponse::from).collect())
    }

    /// List role history for a zone, newest interval first
    #[instrument(skip(self))]
    pub async fn zone_role_history(
        &self,
        zone_id: ZoneId,
    ) -> ServiceResult<Vec<ZoneRoleHistoryResponse>> {
        if !self.ctx.zone_repo().exists(zone_id).await? {
            return Err(ServiceError::not_found("Zone", zone_id.to_string()));
        }

        let entries = self.ctx.zone_role_repo().history_by_zone(zone_id).await?;
        Ok(entries.iter().map(ZoneRoleHistoryResponse::from).collect())
    }
}
