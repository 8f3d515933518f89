//! PostgreSQL implementation of ZoneRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bng_core::entities::Zone;
use bng_core::traits::{RepoResult, ZoneRepository};
use bng_core::value_objects::ZoneId;

use crate::models::ZoneModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ZoneRepository
#[derive(Clone)]
pub struct PgZoneRepository {
    pool: PgPool,
}

impl PgZoneRepository {
    /// Create a new PgZoneRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneRepository for PgZoneRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ZoneId) -> RepoResult<Option<Zone>> {
        let result = sqlx::query_as::<_, ZoneModel>(
            r#"
            SELECT id, name, created_at
            FROM zones
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Zone::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: ZoneId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM zones WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
