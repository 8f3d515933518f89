//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bng_core::value_objects::PrimaryRole;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// ============================================================================
// Role Assignment Responses
// ============================================================================

/// Live chapter role assignment
#[derive(Debug, Serialize)]
pub struct ChapterRoleResponse {
    pub id: String,
    pub member_id: String,
    pub chapter_id: String,
    pub role_type: String,
    pub assigned_at: DateTime<Utc>,
}

/// Live zone role assignment
#[derive(Debug, Serialize)]
pub struct ZoneRoleResponse {
    pub id: String,
    pub member_id: String,
    pub zone_id: String,
    pub role_type: String,
    pub assigned_at: DateTime<Utc>,
}

/// Result of removing a role assignment
#[derive(Debug, Serialize)]
pub struct RemovedRoleResponse {
    pub removed_at: DateTime<Utc>,
}

// ============================================================================
// History Responses
// ============================================================================

/// One chapter role history interval
#[derive(Debug, Serialize)]
pub struct ChapterRoleHistoryResponse {
    pub id: String,
    pub role_id: String,
    pub member_id: String,
    pub chapter_id: String,
    pub role_type: String,
    pub action: String,
    pub performed_by_id: Option<String>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// One zone role history interval
#[derive(Debug, Serialize)]
pub struct ZoneRoleHistoryResponse {
    pub id: String,
    pub role_id: String,
    pub member_id: String,
    pub zone_id: String,
    pub role_type: String,
    pub action: String,
    pub performed_by_id: Option<String>,
    pub performed_by_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Access Scope Responses
// ============================================================================

/// Categorized chapter access for a member
#[derive(Debug, Serialize)]
pub struct AccessScopeResponse {
    pub office_bearer: Vec<String>,
    pub development_coordinator: Vec<String>,
    pub regional_director: Vec<String>,
    pub own_chapter: Option<String>,
    pub primary_role: PrimaryRole,
}

/// A member's coarse display role
#[derive(Debug, Serialize)]
pub struct PrimaryRoleResponse {
    pub member_id: String,
    pub primary_role: PrimaryRole,
}
