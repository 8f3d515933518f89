//! Access scope resolution service
//!
//! Resolves the categorized set of chapters a member may act upon from their
//! live role assignments. Runs on every authentication and dashboard request,
//! so an unknown member yields an empty scope rather than an error.

use tracing::{instrument, warn};

use bng_core::entities::ZoneRoleAssignment;
use bng_core::value_objects::{AccessScope, MemberId, ZoneId};

use crate::dto::{AccessScopeResponse, PrimaryRoleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access scope resolution service
pub struct AccessScopeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessScopeService<'a> {
    /// Create a new AccessScopeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the full access scope for a member.
    ///
    /// Chapter roles grant their category directly. Zone roles expand to every
    /// chapter of the zone. The member's home chapter is recorded only when no
    /// role already covers it.
    #[instrument(skip(self))]
    pub async fn resolve(&self, member_id: MemberId) -> ServiceResult<AccessScope> {
        // Unknown identities resolve to an empty scope, never an error
        let Some(member) = self.ctx.member_repo().find_by_id(member_id).await? else {
            return Ok(AccessScope::empty());
        };

        let mut scope = AccessScope::empty();

        for assignment in self.ctx.chapter_role_repo().find_by_member(member_id).await? {
            scope.grant(assignment.role_type.category(), assignment.chapter_id);
        }

        for assignment in self.zone_roles_of_member(member_id).await {
            for chapter_id in self.chapters_of_zone(assignment.zone_id).await {
                scope.grant_regional(chapter_id);
            }
        }

        if let Some(home) = member.chapter_id {
            if !scope.covers(home) {
                scope.own_chapter = Some(home);
            }
        }

        Ok(scope)
    }

    /// Resolve a member's scope as an API response
    #[instrument(skip(self))]
    pub async fn resolve_response(&self, member_id: MemberId) -> ServiceResult<AccessScopeResponse> {
        let scope = self.resolve(member_id).await?;
        Ok(AccessScopeResponse::from(&scope))
    }

    /// Derive the member's primary role label from their resolved scope
    #[instrument(skip(self))]
    pub async fn primary_role(&self, member_id: MemberId) -> ServiceResult<PrimaryRoleResponse> {
        let scope = self.resolve(member_id).await?;
        Ok(PrimaryRoleResponse {
            member_id: member_id.to_string(),
            primary_role: scope.primary_role(),
        })
    }

    /// Fetch a member's zone roles, degrading to none on failure.
    ///
    /// Same policy as the zone expansion below: the regional_director category
    /// comes back empty while chapter-level access survives.
    async fn zone_roles_of_member(&self, member_id: MemberId) -> Vec<ZoneRoleAssignment> {
        match self.ctx.zone_role_repo().find_by_member(member_id).await {
            Ok(assignments) => assignments,
            Err(e) => {
                warn!(member_id = %member_id, error = %e, "Failed to read zone roles");
                Vec::new()
            }
        }
    }

    /// Expand a zone to its chapter ids, degrading to empty on failure.
    ///
    /// A zone whose chapters cannot be read must not fail the whole scope
    /// resolution; the member keeps whatever chapter-level access they have.
    async fn chapters_of_zone(&self, zone_id: ZoneId) -> Vec<bng_core::value_objects::ChapterId> {
        match self.ctx.chapter_repo().find_by_zone(zone_id).await {
            Ok(chapters) => chapters.into_iter().map(|c| c.id).collect(),
            Err(e) => {
                warn!(zone_id = %zone_id, error = %e, "Failed to expand zone to chapters");
                Vec::new()
            }
        }
    }
}
