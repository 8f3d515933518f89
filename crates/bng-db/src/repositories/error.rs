//! Error handling utilities for repositories

use bng_core::error::DomainError;
use bng_core::value_objects::AssignmentId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check whether a SQLx error is a unique constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Create an "assignment not found" error
pub fn assignment_not_found(id: AssignmentId) -> DomainError {
    DomainError::AssignmentNotFound(id)
}
