//! Access scope handlers
//!
//! Endpoints for resolving a member's categorized chapter access.

use axum::{
    extract::{Path, State},
    Json,
};
use bng_core::value_objects::MemberId;
use bng_service::dto::{AccessScopeResponse, PrimaryRoleResponse};
use bng_service::AccessScopeService;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid member_id format"))
}

/// Resolve a member's full access scope
///
/// GET /members/{member_id}/access-scope
pub async fn get_access_scope(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<AccessScopeResponse>> {
    let member_id = parse_member_id(&member_id)?;

    let service = AccessScopeService::new(state.service_context());
    let scope = service.resolve_response(member_id).await?;
    Ok(Json(scope))
}

/// Derive a member's primary role label
///
/// GET /members/{member_id}/primary-role
pub async fn get_primary_role(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<PrimaryRoleResponse>> {
    let member_id = parse_member_id(&member_id)?;

    let service = AccessScopeService::new(state.service_context());
    let response = service.primary_role(member_id).await?;
    Ok(Json(response))
}
