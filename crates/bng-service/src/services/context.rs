//! Service context - dependency container for services
//!
//! Holds the repositories needed by services. Repositories are injected as
//! trait objects so tests can substitute in-memory implementations.

use std::sync::Arc;

use bng_core::traits::{
    ChapterRepository, ChapterRoleRepository, MemberRepository, ZoneRepository, ZoneRoleRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
    zone_repo: Arc<dyn ZoneRepository>,
    chapter_role_repo: Arc<dyn ChapterRoleRepository>,
    zone_role_repo: Arc<dyn ZoneRoleRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        chapter_repo: Arc<dyn ChapterRepository>,
        zone_repo: Arc<dyn ZoneRepository>,
        chapter_role_repo: Arc<dyn ChapterRoleRepository>,
        zone_role_repo: Arc<dyn ZoneRoleRepository>,
    ) -> Self {
        Self {
            member_repo,
            chapter_repo,
            zone_repo,
            chapter_role_repo,
            zone_role_repo,
        }
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the chapter repository
    pub fn chapter_repo(&self) -> &dyn ChapterRepository {
        self.chapter_repo.as_ref()
    }

    /// Get the zone repository
    pub fn zone_repo(&self) -> &dyn ZoneRepository {
        self.zone_repo.as_ref()
    }

    /// Get the chapter role repository
    pub fn chapter_role_repo(&self) -> &dyn ChapterRoleRepository {
        self.chapter_role_repo.as_ref()
    }

    /// Get the zone role repository
    pub fn zone_role_repo(&self) -> &dyn ZoneRoleRepository {
        self.zone_role_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    chapter_repo: Option<Arc<dyn ChapterRepository>>,
    zone_repo: Option<Arc<dyn ZoneRepository>>,
    chapter_role_repo: Option<Arc<dyn ChapterRoleRepository>>,
    zone_role_repo: Option<Arc<dyn ZoneRoleRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn chapter_repo(mut self, repo: Arc<dyn ChapterRepository>) -> Self {
        self.chapter_repo = Some(repo);
        self
    }

    pub fn zone_repo(mut self, repo: Arc<dyn ZoneRepository>) -> Self {
        self.zone_repo = Some(repo);
        self
    }

    pub fn chapter_role_repo(mut self, repo: Arc<dyn ChapterRoleRepository>) -> Self {
        self.chapter_role_repo = Some(repo);
        self
    }

    pub fn zone_role_repo(mut self, repo: Arc<dyn ZoneRoleRepository>) -> Self {
        self.zone_role_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.chapter_repo
                .ok_or_else(|| ServiceError::validation("chapter_repo is required"))?,
            self.zone_repo
                .ok_or_else(|| ServiceError::validation("zone_repo is required"))?,
            self.chapter_role_repo
                .ok_or_else(|| ServiceError::validation("chapter_role_repo is required"))?,
            self.zone_role_repo
                .ok_or_else(|| ServiceError::validation("zone_role_repo is required"))?,
        ))
    }
}
