//! Database models with SQLx `FromRow` derives

mod chapter;
mod chapter_role;
mod member;
mod zone;
mod zone_role;

pub use chapter::ChapterModel;
pub use chapter_role::{ChapterRoleAssignmentModel, ChapterRoleHistoryModel};
pub use member::MemberModel;
pub use zone::ZoneModel;
pub use zone_role::{ZoneRoleAssignmentModel, ZoneRoleHistoryModel};
