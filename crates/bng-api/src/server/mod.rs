//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bng_common::{AppConfig, AppError};
use bng_db::{
    create_pool, run_migrations, PgChapterRepository, PgChapterRoleRepository, PgMemberRepository,
    PgZoneRepository, PgZoneRoleRepository,
};
use bng_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let is_production = state.config().app.env.is_production();
    let rate_limit = state.config().rate_limit.clone();
    let cors = state.config().cors.clone();

    let api = apply_middleware(create_router(), &rate_limit, &cors, is_production);

    // Health endpoint stays outside the rate-limited stack
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = bng_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Schema migrations applied");

    let service_context = ServiceContextBuilder::new()
        .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
        .chapter_repo(Arc::new(PgChapterRepository::new(pool.clone())))
        .zone_repo(Arc::new(PgZoneRepository::new(pool.clone())))
        .chapter_role_repo(Arc::new(PgChapterRoleRepository::new(pool.clone())))
        .zone_role_repo(Arc::new(PgZoneRoleRepository::new(pool)))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
