//! PostgreSQL repository implementations

mod chapter;
mod chapter_role;
mod error;
mod member;
mod zone;
mod zone_role;

pub use chapter::PgChapterRepository;
pub use chapter_role::PgChapterRoleRepository;
pub use member::PgMemberRepository;
pub use zone::PgZoneRepository;
pub use zone_role::PgZoneRoleRepository;
