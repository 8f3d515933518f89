//! # bng-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web
//! framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Chapter, ChapterRoleAssignment, ChapterRoleHistoryEntry, Member, NewChapterRole, NewZoneRole,
    Zone, ZoneRoleAssignment, ZoneRoleHistoryEntry,
};
pub use error::DomainError;
pub use traits::{
    ChapterRepository, ChapterRoleRepository, MemberRepository, RepoResult, ZoneRepository,
    ZoneRoleRepository,
};
pub use value_objects::{
    AccessScope, Actor, AssignmentId, ChapterId, ChapterRoleType, IdParseError, MemberId,
    PrimaryRole, RoleAction, RoleCategory, RoleTypeParseError, ZoneId, ZoneRoleType,
    SYSTEM_ACTOR_NAME,
};
