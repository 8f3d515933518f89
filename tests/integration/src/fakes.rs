//! In-memory repository implementations
//!
//! These mirror the transactional semantics of the PostgreSQL repositories:
//! one live row per (unit, roleType) slot, a matching open history interval
//! for every live row, and a compensating record when a removal finds no open
//! interval.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use bng_core::entities::{
    Chapter, ChapterRoleAssignment, ChapterRoleHistoryEntry, Member, NewChapterRole, NewZoneRole,
    Zone, ZoneRoleAssignment, ZoneRoleHistoryEntry,
};
use bng_core::error::DomainError;
use bng_core::traits::{
    ChapterRepository, ChapterRoleRepository, MemberRepository, RepoResult, ZoneRepository,
    ZoneRoleRepository,
};
use bng_core::value_objects::{
    Actor, AssignmentId, ChapterId, ChapterRoleType, MemberId, RoleAction, ZoneId, ZoneRoleType,
};
use bng_service::ServiceContext;

#[derive(Default)]
struct StoreState {
    zones: HashMap<i64, Zone>,
    chapters: HashMap<i64, Chapter>,
    members: HashMap<i64, Member>,
    chapter_roles: Vec<ChapterRoleAssignment>,
    chapter_history: Vec<ChapterRoleHistoryEntry>,
    zone_roles: Vec<ZoneRoleAssignment>,
    zone_history: Vec<ZoneRoleHistoryEntry>,
    next_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory store implementing all repository traits
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service context backed by this store
    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    /// Build a service context whose chapter lookups fail for one zone
    pub fn context_with_failing_zone(&self, fail_zone: ZoneId) -> ServiceContext {
        ServiceContext::new(
            Arc::new(self.clone()),
            Arc::new(FlakyChapterRepository {
                inner: self.clone(),
                fail_zone,
            }),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    /// Build a service context whose zone-role lookups all fail
    pub fn context_with_failing_zone_roles(&self) -> ServiceContext {
        ServiceContext::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(FlakyZoneRoleRepository),
        )
    }

    pub fn add_zone(&self, name: &str) -> ZoneId {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.zones.insert(
            id,
            Zone {
                id: ZoneId::new(id),
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
        ZoneId::new(id)
    }

    pub fn add_chapter(&self, zone_id: ZoneId, name: &str) -> ChapterId {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.chapters.insert(
            id,
            Chapter {
                id: ChapterId::new(id),
                zone_id,
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
        ChapterId::new(id)
    }

    pub fn add_member(&self, name: &str, chapter_id: Option<ChapterId>) -> MemberId {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.members.insert(
            id,
            Member {
                id: MemberId::new(id),
                name: name.to_string(),
                email: None,
                chapter_id,
                joined_at: Utc::now(),
            },
        );
        MemberId::new(id)
    }

    /// Drop the open history interval for a chapter slot, simulating
    /// inconsistent pre-existing data
    pub fn corrupt_chapter_history(&self, chapter_id: ChapterId) {
        let mut state = self.state.lock();
        state
            .chapter_history
            .retain(|entry| entry.chapter_id != chapter_id);
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.state.lock().members.get(&id.into_inner()).cloned())
    }

    async fn exists(&self, id: MemberId) -> RepoResult<bool> {
        Ok(self.state.lock().members.contains_key(&id.into_inner()))
    }
}

#[async_trait]
impl ChapterRepository for InMemoryStore {
    async fn find_by_id(&self, id: ChapterId) -> RepoResult<Option<Chapter>> {
        Ok(self.state.lock().chapters.get(&id.into_inner()).cloned())
    }

    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<Chapter>> {
        let mut chapters: Vec<Chapter> = self
            .state
            .lock()
            .chapters
            .values()
            .filter(|c| c.zone_id == zone_id)
            .cloned()
            .collect();
        chapters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(chapters)
    }

    async fn exists(&self, id: ChapterId) -> RepoResult<bool> {
        Ok(self.state.lock().chapters.contains_key(&id.into_inner()))
    }
}

#[async_trait]
impl ZoneRepository for InMemoryStore {
    async fn find_by_id(&self, id: ZoneId) -> RepoResult<Option<Zone>> {
        Ok(self.state.lock().zones.get(&id.into_inner()).cloned())
    }

    async fn exists(&self, id: ZoneId) -> RepoResult<bool> {
        Ok(self.state.lock().zones.contains_key(&id.into_inner()))
    }
}

#[async_trait]
impl ChapterRoleRepository for InMemoryStore {
    async fn find_by_id(&self, id: AssignmentId) -> RepoResult<Option<ChapterRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .chapter_roles
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_slot(
        &self,
        chapter_id: ChapterId,
        role_type: ChapterRoleType,
    ) -> RepoResult<Option<ChapterRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .chapter_roles
            .iter()
            .find(|a| a.chapter_id == chapter_id && a.role_type == role_type)
            .cloned())
    }

    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<ChapterRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .chapter_roles
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> RepoResult<Vec<ChapterRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .chapter_roles
            .iter()
            .filter(|a| a.chapter_id == chapter_id)
            .cloned()
            .collect())
    }

    async fn assign(
        &self,
        new_role: &NewChapterRole,
        actor: &Actor,
    ) -> RepoResult<ChapterRoleAssignment> {
        let mut state = self.state.lock();

        if let Some(existing) = state
            .chapter_roles
            .iter()
            .find(|a| a.chapter_id == new_role.chapter_id && a.role_type == new_role.role_type)
        {
            return Err(DomainError::RoleSlotOccupied {
                role_type: new_role.role_type.as_str().to_string(),
                holder: existing.member_id,
            });
        }

        let now = Utc::now();
        let role_id = state.next_id();
        let assignment = ChapterRoleAssignment {
            id: AssignmentId::new(role_id),
            member_id: new_role.member_id,
            chapter_id: new_role.chapter_id,
            role_type: new_role.role_type,
            assigned_at: now,
        };
        state.chapter_roles.push(assignment.clone());

        let history_id = state.next_id();
        state.chapter_history.push(ChapterRoleHistoryEntry {
            id: history_id,
            role_id,
            member_id: new_role.member_id,
            chapter_id: new_role.chapter_id,
            role_type: new_role.role_type,
            action: RoleAction::Assigned,
            performed_by_id: actor.performed_by_id,
            performed_by_name: actor.performed_by_name.clone(),
            start_date: now,
            end_date: None,
        });

        Ok(assignment)
    }

    async fn remove(
        &self,
        assignment: &ChapterRoleAssignment,
        actor: &Actor,
    ) -> RepoResult<DateTime<Utc>> {
        let mut state = self.state.lock();
        let now = Utc::now();

        let open = state.chapter_history.iter_mut().find(|entry| {
            entry.chapter_id == assignment.chapter_id
                && entry.role_type == assignment.role_type
                && entry.action == RoleAction::Assigned
                && entry.end_date.is_none()
        });

        if let Some(entry) = open {
            entry.action = RoleAction::Removed;
            entry.end_date = Some(now);
        } else {
            let history_id = state.next_id();
            state.chapter_history.push(ChapterRoleHistoryEntry {
                id: history_id,
                role_id: assignment.id.into_inner(),
                member_id: assignment.member_id,
                chapter_id: assignment.chapter_id,
                role_type: assignment.role_type,
                action: RoleAction::RemovedDirectAction,
                performed_by_id: actor.performed_by_id,
                performed_by_name: actor.performed_by_name.clone(),
                start_date: now,
                end_date: Some(now),
            });
        }

        let before = state.chapter_roles.len();
        state.chapter_roles.retain(|a| a.id != assignment.id);
        if state.chapter_roles.len() == before {
            return Err(DomainError::AssignmentNotFound(assignment.id));
        }

        Ok(now)
    }

    async fn history_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> RepoResult<Vec<ChapterRoleHistoryEntry>> {
        let mut entries: Vec<ChapterRoleHistoryEntry> = self
            .state
            .lock()
            .chapter_history
            .iter()
            .filter(|entry| entry.chapter_id == chapter_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(entries)
    }
}

#[async_trait]
impl ZoneRoleRepository for InMemoryStore {
    async fn find_by_id(&self, id: AssignmentId) -> RepoResult<Option<ZoneRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .zone_roles
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_slot(
        &self,
        zone_id: ZoneId,
        role_type: ZoneRoleType,
    ) -> RepoResult<Option<ZoneRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .zone_roles
            .iter()
            .find(|a| a.zone_id == zone_id && a.role_type == role_type)
            .cloned())
    }

    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<ZoneRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .zone_roles
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleAssignment>> {
        Ok(self
            .state
            .lock()
            .zone_roles
            .iter()
            .filter(|a| a.zone_id == zone_id)
            .cloned()
            .collect())
    }

    async fn assign(
        &self,
        new_role: &NewZoneRole,
        actor: &Actor,
    ) -> RepoResult<ZoneRoleAssignment> {
        let mut state = self.state.lock();

        if let Some(existing) = state
            .zone_roles
            .iter()
            .find(|a| a.zone_id == new_role.zone_id && a.role_type == new_role.role_type)
        {
            return Err(DomainError::RoleSlotOccupied {
                role_type: new_role.role_type.as_str().to_string(),
                holder: existing.member_id,
            });
        }

        let now = Utc::now();
        let role_id = state.next_id();
        let assignment = ZoneRoleAssignment {
            id: AssignmentId::new(role_id),
            member_id: new_role.member_id,
            zone_id: new_role.zone_id,
            role_type: new_role.role_type,
            assigned_at: now,
        };
        state.zone_roles.push(assignment.clone());

        let history_id = state.next_id();
        state.zone_history.push(ZoneRoleHistoryEntry {
            id: history_id,
            role_id,
            member_id: new_role.member_id,
            zone_id: new_role.zone_id,
            role_type: new_role.role_type,
            action: RoleAction::Assigned,
            performed_by_id: actor.performed_by_id,
            performed_by_name: actor.performed_by_name.clone(),
            start_date: now,
            end_date: None,
        });

        Ok(assignment)
    }

    async fn remove(
        &self,
        assignment: &ZoneRoleAssignment,
        actor: &Actor,
    ) -> RepoResult<DateTime<Utc>> {
        let mut state = self.state.lock();
        let now = Utc::now();

        let open = state.zone_history.iter_mut().find(|entry| {
            entry.zone_id == assignment.zone_id
                && entry.role_type == assignment.role_type
                && entry.action == RoleAction::Assigned
                && entry.end_date.is_none()
        });

        if let Some(entry) = open {
            entry.action = RoleAction::Removed;
            entry.end_date = Some(now);
        } else {
            let history_id = state.next_id();
            state.zone_history.push(ZoneRoleHistoryEntry {
                id: history_id,
                role_id: assignment.id.into_inner(),
                member_id: assignment.member_id,
                zone_id: assignment.zone_id,
                role_type: assignment.role_type,
                action: RoleAction::RemovedDirectAction,
                performed_by_id: actor.performed_by_id,
                performed_by_name: actor.performed_by_name.clone(),
                start_date: now,
                end_date: Some(now),
            });
        }

        let before = state.zone_roles.len();
        state.zone_roles.retain(|a| a.id != assignment.id);
        if state.zone_roles.len() == before {
            return Err(DomainError::AssignmentNotFound(assignment.id));
        }

        Ok(now)
    }

    async fn history_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleHistoryEntry>> {
        let mut entries: Vec<ZoneRoleHistoryEntry> = self
            .state
            .lock()
            .zone_history
            .iter()
            .filter(|entry| entry.zone_id == zone_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(entries)
    }
}

/// Zone-role repository where every call fails, simulating a store outage
pub struct FlakyZoneRoleRepository;

impl FlakyZoneRoleRepository {
    fn store_down() -> DomainError {
        DomainError::DatabaseError("connection reset".to_string())
    }
}

#[async_trait]
impl ZoneRoleRepository for FlakyZoneRoleRepository {
    async fn find_by_id(&self, _id: AssignmentId) -> RepoResult<Option<ZoneRoleAssignment>> {
        Err(Self::store_down())
    }

    async fn find_by_slot(
        &self,
        _zone_id: ZoneId,
        _role_type: ZoneRoleType,
    ) -> RepoResult<Option<ZoneRoleAssignment>> {
        Err(Self::store_down())
    }

    async fn find_by_member(&self, _member_id: MemberId) -> RepoResult<Vec<ZoneRoleAssignment>> {
        Err(Self::store_down())
    }

    async fn find_by_zone(&self, _zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleAssignment>> {
        Err(Self::store_down())
    }

    async fn assign(
        &self,
        _new_role: &NewZoneRole,
        _actor: &Actor,
    ) -> RepoResult<ZoneRoleAssignment> {
        Err(Self::store_down())
    }

    async fn remove(
        &self,
        _assignment: &ZoneRoleAssignment,
        _actor: &Actor,
    ) -> RepoResult<DateTime<Utc>> {
        Err(Self::store_down())
    }

    async fn history_by_zone(&self, _zone_id: ZoneId) -> RepoResult<Vec<ZoneRoleHistoryEntry>> {
        Err(Self::store_down())
    }
}

/// Chapter repository wrapper whose zone expansion fails for one zone
pub struct FlakyChapterRepository {
    inner: InMemoryStore,
    fail_zone: ZoneId,
}

#[async_trait]
impl ChapterRepository for FlakyChapterRepository {
    async fn find_by_id(&self, id: ChapterId) -> RepoResult<Option<Chapter>> {
        ChapterRepository::find_by_id(&self.inner, id).await
    }

    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<Chapter>> {
        if zone_id == self.fail_zone {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        ChapterRepository::find_by_zone(&self.inner, zone_id).await
    }

    async fn exists(&self, id: ChapterId) -> RepoResult<bool> {
        ChapterRepository::exists(&self.inner, id).await
    }
}
