//! Role assignment handlers
//!
//! Endpoints for chapter and zone role management.

use axum::{
    extract::{Path, State},
    Json,
};
use bng_core::value_objects::{AssignmentId, ChapterId, ZoneId};
use bng_service::dto::{
    AssignRoleRequest, ChapterRoleHistoryResponse, ChapterRoleResponse, RemoveRoleRequest,
    RemovedRoleResponse, ZoneRoleHistoryResponse, ZoneRoleResponse,
};
use bng_service::RoleAssignmentService;

use crate::extractors::{OptionalValidatedJson, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_chapter_id(raw: &str) -> Result<ChapterId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid chapter_id format"))
}

fn parse_zone_id(raw: &str) -> Result<ZoneId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid zone_id format"))
}

fn parse_assignment_id(raw: &str) -> Result<AssignmentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid assignment_id format"))
}

/// List live role assignments in a chapter
///
/// GET /chapters/{chapter_id}/roles
pub async fn get_chapter_roles(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> ApiResult<Json<Vec<ChapterRoleResponse>>> {
    let chapter_id = parse_chapter_id(&chapter_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let roles = service.list_chapter_roles(chapter_id).await?;
    Ok(Json(roles))
}

/// Assign a role in a chapter
///
/// POST /chapters/{chapter_id}/roles
pub async fn assign_chapter_role(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AssignRoleRequest>,
) -> ApiResult<Created<Json<ChapterRoleResponse>>> {
    let chapter_id = parse_chapter_id(&chapter_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let response = service.assign_chapter_role(chapter_id, request).await?;
    Ok(Created(Json(response)))
}

/// Remove a role assignment from a chapter
///
/// DELETE /chapters/{chapter_id}/roles/{assignment_id}
pub async fn remove_chapter_role(
    State(state): State<AppState>,
    Path((chapter_id, assignment_id)): Path<(String, String)>,
    OptionalValidatedJson(body): OptionalValidatedJson<RemoveRoleRequest>,
) -> ApiResult<Json<RemovedRoleResponse>> {
    let chapter_id = parse_chapter_id(&chapter_id)?;
    let assignment_id = parse_assignment_id(&assignment_id)?;
    let actor = body.unwrap_or_default().actor();

    let service = RoleAssignmentService::new(state.service_context());
    let response = service
        .remove_chapter_role(chapter_id, assignment_id, actor)
        .await?;
    Ok(Json(response))
}

/// List role history for a chapter
///
/// GET /chapters/{chapter_id}/roles/history
pub async fn get_chapter_role_history(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> ApiResult<Json<Vec<ChapterRoleHistoryResponse>>> {
    let chapter_id = parse_chapter_id(&chapter_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let history = service.chapter_role_history(chapter_id).await?;
    Ok(Json(history))
}

/// List live role assignments in a zone
///
/// GET /zones/{zone_id}/roles
pub async fn get_zone_roles(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<Vec<ZoneRoleResponse>>> {
    let zone_id = parse_zone_id(&zone_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let roles = service.list_zone_roles(zone_id).await?;
    Ok(Json(roles))
}

/// Assign a role in a zone
///
/// POST /zones/{zone_id}/roles
pub async fn assign_zone_role(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AssignRoleRequest>,
) -> ApiResult<Created<Json<ZoneRoleResponse>>> {
    let zone_id = parse_zone_id(&zone_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let response = service.assign_zone_role(zone_id, request).await?;
    Ok(Created(Json(response)))
}

/// Remove a role assignment from a zone
///
/// DELETE /zones/{zone_id}/roles/{assignment_id}
pub async fn remove_zone_role(
    State(state): State<AppState>,
    Path((zone_id, assignment_id)): Path<(String, String)>,
    OptionalValidatedJson(body): OptionalValidatedJson<RemoveRoleRequest>,
) -> ApiResult<Json<RemovedRoleResponse>> {
    let zone_id = parse_zone_id(&zone_id)?;
    let assignment_id = parse_assignment_id(&assignment_id)?;
    let actor = body.unwrap_or_default().actor();

    let service = RoleAssignmentService::new(state.service_context());
    let response = service
        .remove_zone_role(zone_id, assignment_id, actor)
        .await?;
    Ok(Json(response))
}

/// List role history for a zone
///
/// GET /zones/{zone_id}/roles/history
pub async fn get_zone_role_history(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<Vec<ZoneRoleHistoryResponse>>> {
    let zone_id = parse_zone_id(&zone_id)?;

    let service = RoleAssignmentService::new(state.service_context());
    let history = service.zone_role_history(zone_id).await?;
    Ok(Json(history))
}
