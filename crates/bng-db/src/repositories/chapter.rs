//! PostgreSQL implementation of ChapterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bng_core::entities::Chapter;
use bng_core::traits::{ChapterRepository, RepoResult};
use bng_core::value_objects::{ChapterId, ZoneId};

use crate::models::ChapterModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChapterRepository
#[derive(Clone)]
pub struct PgChapterRepository {
    pool: PgPool,
}

impl PgChapterRepository {
    /// Create a new PgChapterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRepository for PgChapterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ChapterId) -> RepoResult<Option<Chapter>> {
        let result = sqlx::query_as::<_, ChapterModel>(
            r#"
            SELECT id, zone_id, name, created_at
            FROM chapters
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chapter::from))
    }

    #[instrument(skip(self))]
    async fn find_by_zone(&self, zone_id: ZoneId) -> RepoResult<Vec<Chapter>> {
        let results = sqlx::query_as::<_, ChapterModel>(
            r#"
            SELECT id, zone_id, name, created_at
            FROM chapters
            WHERE zone_id = $1
            ORDER BY name
            "#,
        )
        .bind(zone_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Chapter::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: ChapterId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM chapters WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
