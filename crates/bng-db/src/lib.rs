//! Database layer: PostgreSQL pool management, row models, and repository
//! implementations for the role assignment tables.

pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgChapterRepository, PgChapterRoleRepository, PgMemberRepository, PgZoneRepository,
    PgZoneRoleRepository,
};
