//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{access, health, roles};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(chapter_routes())
        .merge(zone_routes())
        .merge(member_routes())
}

/// Chapter role routes
fn chapter_routes() -> Router<AppState> {
    Router::new()
        .route("/chapters/:chapter_id/roles", get(roles::get_chapter_roles))
        .route("/chapters/:chapter_id/roles", post(roles::assign_chapter_role))
        .route(
            "/chapters/:chapter_id/roles/history",
            get(roles::get_chapter_role_history),
        )
        .route(
            "/chapters/:chapter_id/roles/:assignment_id",
            delete(roles::remove_chapter_role),
        )
}

/// Zone role routes
fn zone_routes() -> Router<AppState> {
    Router::new()
        .route("/zones/:zone_id/roles", get(roles::get_zone_roles))
        .route("/zones/:zone_id/roles", post(roles::assign_zone_role))
        .route(
            "/zones/:zone_id/roles/history",
            get(roles::get_zone_role_history),
        )
        .route(
            "/zones/:zone_id/roles/:assignment_id",
            delete(roles::remove_zone_role),
        )
}

/// Member access resolution routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members/:member_id/access-scope", get(access::get_access_scope))
        .route("/members/:member_id/primary-role", get(access::get_primary_role))
}
