//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChapterRepository, ChapterRoleRepository, MemberRepository, RepoResult, ZoneRepository,
    ZoneRoleRepository,
};
