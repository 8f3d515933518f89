//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bng_core::entities::Member;
use bng_core::traits::{MemberRepository, RepoResult};
use bng_core::value_objects::MemberId;

use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, name, email, chapter_id, joined_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: MemberId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM members WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
