//! Access scope - the categorized set of chapters an identity may act upon
//!
//! Produced by the access-scope resolver on every authentication and dashboard
//! request. Categories are not mutually exclusive; chapter ids are deduplicated
//! within each category independently.

use serde::Serialize;

use super::ids::ChapterId;
use super::role_type::RoleCategory;

/// Categorized chapter access for one identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessScope {
    /// Chapters where the member holds an office-bearer role
    pub office_bearer: Vec<ChapterId>,
    /// Chapters where the member holds a coordinator/mentor role
    pub development_coordinator: Vec<ChapterId>,
    /// Chapters reached through a zone-level leadership role
    pub regional_director: Vec<ChapterId>,
    /// The member's home chapter, when not already covered by a category above
    pub own_chapter: Option<ChapterId>,
}

impl AccessScope {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no role grants any access and no home chapter is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.office_bearer.is_empty()
            && self.development_coordinator.is_empty()
            && self.regional_director.is_empty()
            && self.own_chapter.is_none()
    }

    /// Add a chapter under the given category, ignoring duplicates.
    pub fn grant(&mut self, category: RoleCategory, chapter_id: ChapterId) {
        let bucket = match category {
            RoleCategory::OfficeBearer => &mut self.office_bearer,
            RoleCategory::DevelopmentCoordinator => &mut self.development_coordinator,
        };
        if !bucket.contains(&chapter_id) {
            bucket.push(chapter_id);
        }
    }

    /// Add a chapter reached through a zone role, ignoring duplicates.
    pub fn grant_regional(&mut self, chapter_id: ChapterId) {
        if !self.regional_director.contains(&chapter_id) {
            self.regional_director.push(chapter_id);
        }
    }

    /// True when the chapter appears in any role-derived category.
    #[must_use]
    pub fn covers(&self, chapter_id: ChapterId) -> bool {
        self.office_bearer.contains(&chapter_id)
            || self.development_coordinator.contains(&chapter_id)
            || self.regional_director.contains(&chapter_id)
    }

    /// Derive the single display label from this scope.
    ///
    /// Priority order, not a union: a zone role wins over any chapter role, and
    /// a coordinator role wins over an office-bearer role. The label is a
    /// display convenience only; authorization must use the full scope.
    #[must_use]
    pub fn primary_role(&self) -> PrimaryRole {
        if !self.regional_director.is_empty() {
            PrimaryRole::RegionalDirector
        } else if !self.development_coordinator.is_empty() {
            PrimaryRole::DevelopmentCoordinator
        } else if !self.office_bearer.is_empty() {
            PrimaryRole::OfficeBearer
        } else {
            PrimaryRole::Member
        }
    }
}

/// Coarse display label for an identity's strongest role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimaryRole {
    #[serde(rename = "regional_director")]
    RegionalDirector,
    #[serde(rename = "development_coordinator")]
    DevelopmentCoordinator,
    #[serde(rename = "office_bearer")]
    OfficeBearer,
    #[serde(rename = "member")]
    Member,
}

impl PrimaryRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegionalDirector => "regional_director",
            Self::DevelopmentCoordinator => "development_coordinator",
            Self::OfficeBearer => "office_bearer",
            Self::Member => "member",
        }
    }
}

impl std::fmt::Display for PrimaryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
