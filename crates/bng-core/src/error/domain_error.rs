//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{AssignmentId, ChapterId, MemberId, ZoneId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(ChapterId),

    #[error("Zone not found: {0}")]
    ZoneNotFound(ZoneId),

    #[error("Role assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Unknown role type: {0}")]
    UnknownRoleType(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// The (unit, roleType) slot is already held by another member. The
    /// existing assignment is left untouched; the caller must remove it first.
    #[error("Role {role_type} is already held by member {holder}")]
    RoleSlotOccupied { role_type: String, holder: MemberId },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ChapterNotFound(_) => "UNKNOWN_CHAPTER",
            Self::ZoneNotFound(_) => "UNKNOWN_ZONE",
            Self::AssignmentNotFound(_) => "UNKNOWN_ASSIGNMENT",
            Self::UnknownRoleType(_) => "UNKNOWN_ROLE_TYPE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::RoleSlotOccupied { .. } => "ROLE_SLOT_OCCUPIED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::ChapterNotFound(_)
                | Self::ZoneNotFound(_)
                | Self::AssignmentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownRoleType(_) | Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RoleSlotOccupied { .. })
    }
}
