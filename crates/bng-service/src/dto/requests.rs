//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use bng_core::value_objects::{Actor, MemberId};

/// Assign a role within a chapter or zone
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignRoleRequest {
    pub member_id: i64,

    #[validate(length(min = 1, max = 64, message = "Role type must be 1-64 characters"))]
    pub role_type: String,

    /// Member who performs the assignment; null for system paths
    pub performed_by_id: Option<i64>,

    #[validate(length(max = 255, message = "Performer name must be at most 255 characters"))]
    pub performed_by_name: Option<String>,
}

impl AssignRoleRequest {
    pub fn member_id(&self) -> MemberId {
        MemberId::new(self.member_id)
    }

    /// Build the history actor, defaulting to "System"
    pub fn actor(&self) -> Actor {
        Actor::from_parts(
            self.performed_by_id.map(MemberId::new),
            self.performed_by_name.clone(),
        )
    }
}

/// Optional body for role removal, identifying who removed the role
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RemoveRoleRequest {
    pub performed_by_id: Option<i64>,

    #[validate(length(max = 255, message = "Performer name must be at most 255 characters"))]
    pub performed_by_name: Option<String>,
}

impl RemoveRoleRequest {
    /// Build the removing actor, defaulting to "System"
    pub fn actor(&self) -> Actor {
        Actor::from_parts(
            self.performed_by_id.map(MemberId::new),
            self.performed_by_name.clone(),
        )
    }
}
