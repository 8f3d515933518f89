//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Repositories are injected per process (never a
//! module-level singleton), so tests substitute in-memory fakes.
//!
//! `assign` and `remove` on the role repositories are transactional units of
//! work: the live row and its history interval are written together, and a
//! failure of either write undoes both.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Chapter, ChapterRoleAssignment, ChapterRoleHistoryEntry, Member, NewChapterRole, NewZoneRole,
    Zone, ZoneRoleAssignment, ZoneRoleHistoryEntry,
};
use crate::error::DomainError;
use crate::value_objects::{
    Actor, AssignmentId, ChapterId, ChapterRoleType, MemberId, ZoneId, ZoneRoleType,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Check that a member exists
    async fn exists(&self, id: MemberId) -> RepoResult<bool>;
}

// ============================================================================
// Chapter Repository
// ============================================================================

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Find chapter by ID
    async fn find_by_id(&self, id: ChapterId) -> RepoResult<Option<Chapter>>;

    /// List every chapter belonging to a zone
    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<Chapter>>;

    /// Check that a chapter exists
    async fn exists(&self, id: ChapterId) -> RepoResult<bool>;
}

// ============================================================================
// Zone Repository
// ============================================================================

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Find zone by ID
    async fn find_by_id(&self, id: ZoneId) -> RepoResult<Option<Zone>>;

    /// Check that a zone exists
    async fn exists(&self, id: ZoneId) -> RepoResult<bool>;
}

// ============================================================================
// Chapter Role Repository
// ============================================================================

#[async_trait]
pub trait ChapterRoleRepository: Send + Sync {
    /// Find a live assignment by ID
    async fn find_by_id(&self, id: AssignmentId) -> RepoResult<Option<ChapterRoleAssignment>>;

    /// Find the live assignment for a (chapter, roleType) slot
    async fn find_by_slot(
        &self,
        chapter_id: ChapterId,
        role_type: ChapterRoleType,
    ) -> RepoResult<Option<ChapterRoleAssignment>>;

    /// List all live assignments held by a member
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<ChapterRoleAssignment>>;

    /// List all live assignments in a chapter
    async fn find_by_chapter(&self, chapter_id: ChapterId)
        -> RepoResult<Vec<ChapterRoleAssignment>>;

    /// Create a live assignment and its open history interval atomically.
    ///
    /// A uniqueness violation on the (chapter, roleType) slot is surfaced as
    /// `DomainError::RoleSlotOccupied`; the losing transaction is not retried.
    async fn assign(
        &self,
        new_role: &NewChapterRole,
        actor: &Actor,
    ) -> RepoResult<ChapterRoleAssignment>;

    /// Close the open history interval and delete the live row atomically.
    ///
    /// When no open interval exists (pre-existing data inconsistency), a
    /// compensating `removed_direct_action` record is synthesized instead of
    /// aborting. Returns the removal timestamp.
    async fn remove(
        &self,
        assignment: &ChapterRoleAssignment,
        actor: &Actor,
    ) -> RepoResult<DateTime<Utc>>;

    /// List history entries for a chapter, newest interval first
    async fn history_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> RepoResult<Vec<ChapterRoleHistoryEntry>>;
}

// ============================================================================
// Zone Role Repository
// ============================================================================

#[async_trait]
pub trait ZoneRoleRepository: Send + Sync {
    /// Find a live assignment by ID
    async fn find_by_id(&self, id: AssignmentId) -> RepoResult<Option<ZoneRoleAssignment>>;

    /// Find the live assignment for a (zone, roleType) slot
    async fn find_by_slot(
        &self,
        zone_id: ZoneId,
        role_type: ZoneRoleType,
    ) -> RepoResult<Option<ZoneRoleAssignment>>;

    /// List all live zone assignments held by a member
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<ZoneRoleAssignment>>;

    /// List all live assignments in a zone
    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleAssignment>>;

    /// Create a live assignment and its open history interval atomically
    async fn assign(&self, new_role: &NewZoneRole, actor: &Actor)
        -> RepoResult<ZoneRoleAssignment>;

    /// Close the open history interval and delete the live row atomically
    async fn remove(
        &self,
        assignment: &ZoneRoleAssignment,
        actor: &Actor,
    ) -> RepoResult<DateTime<Utc>>;

    /// List history entries for a zone, newest interval first
    async fn history_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleHistoryEntry>>;
}
