//! Domain entities

mod chapter;
mod member;
mod role_assignment;
mod role_history;
mod zone;

pub use chapter::Chapter;
pub use member::Member;
pub use role_assignment::{
    ChapterRoleAssignment, NewChapterRole, NewZoneRole, ZoneRoleAssignment,
};
pub use role_history::{ChapterRoleHistoryEntry, ZoneRoleHistoryEntry};
pub use zone::Zone;
