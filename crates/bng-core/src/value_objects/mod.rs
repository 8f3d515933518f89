//! Value objects - ids, role types, access scope, actor

mod access_scope;
mod actor;
mod ids;
mod role_type;

pub use access_scope::{AccessScope, PrimaryRole};
pub use actor::{Actor, SYSTEM_ACTOR_NAME};
pub use ids::{AssignmentId, ChapterId, IdParseError, MemberId, ZoneId};
pub use role_type::{
    ChapterRoleType, RoleAction, RoleCategory, RoleTypeParseError, ZoneRoleType,
};
