//! PostgreSQL implementation of ChapterRoleRepository
//!
//! `assign` and `remove` each run in a single transaction so a live
//! assignment row and its history interval can never diverge.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{instrument, warn};

use bng_core::entities::{ChapterRoleAssignment, ChapterRoleHistoryEntry, NewChapterRole};
use bng_core::traits::{ChapterRoleRepository, RepoResult};
use bng_core::value_objects::{Actor, AssignmentId, ChapterId, ChapterRoleType, MemberId, RoleAction};

use crate::models::{ChapterRoleAssignmentModel, ChapterRoleHistoryModel};

use super::error::{is_unique_violation, map_db_error};

/// PostgreSQL implementation of ChapterRoleRepository
#[derive(Clone)]
pub struct PgChapterRoleRepository {
    pool: PgPool,
}

impl PgChapterRoleRepository {
    /// Create a new PgChapterRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRoleRepository for PgChapterRoleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AssignmentId) -> RepoResult<Option<ChapterRoleAssignment>> {
        let result = sqlx::query_as::<_, ChapterRoleAssignmentModel>(
            r#"
            SELECT id, member_id, chapter_id, role_type, assigned_at
            FROM chapter_role_assignments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ChapterRoleAssignment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slot(
        &self,
        chapter_id: ChapterId,
        role_type: ChapterRoleType,
    ) -> RepoResult<Option<ChapterRoleAssignment>> {
        let result = sqlx::query_as::<_, ChapterRoleAssignmentModel>(
            r#"
            SELECT id, member_id, chapter_id, role_type, assigned_at
            FROM chapter_role_assignments
            WHERE chapter_id = $1 AND role_type = $2
            "#,
        )
        .bind(chapter_id.into_inner())
        .bind(role_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ChapterRoleAssignment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<ChapterRoleAssignment>> {
        let results = sqlx::query_as::<_, ChapterRoleAssignmentModel>(
            r#"
            SELECT id, member_id, chapter_id, role_type, assigned_at
            FROM chapter_role_assignments
            WHERE member_id = $1
            ORDER BY assigned_at
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(ChapterRoleAssignment::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> RepoResult<Vec<ChapterRoleAssignment>> {
        let results = sqlx::query_as::<_, ChapterRoleAssignmentModel>(
            r#"
            SELECT id, member_id, chapter_id, role_type, assigned_at
            FROM chapter_role_assignments
            WHERE chapter_id = $1
            ORDER BY role_type, assigned_at
            "#,
        )
        .bind(chapter_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(ChapterRoleAssignment::try_from)
            .collect()
    }

    #[instrument(skip(self, actor), fields(role_type = %new_role.role_type.as_str()))]
    async fn assign(
        &self,
        new_role: &NewChapterRole,
        actor: &Actor,
    ) -> RepoResult<ChapterRoleAssignment> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let now = Utc::now();

        let inserted = sqlx::query_as::<_, ChapterRoleAssignmentModel>(
            r#"
            INSERT INTO chapter_role_assignments (member_id, chapter_id, role_type, assigned_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, chapter_id, role_type, assigned_at
            "#,
        )
        .bind(new_role.member_id.into_inner())
        .bind(new_role.chapter_id.into_inner())
        .bind(new_role.role_type.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await;

        let model = match inserted {
            Ok(model) => model,
            Err(e) if is_unique_violation(&e) => {
                // Lost the race for the slot. Report the winner as the holder.
                drop(tx);
                let holder = self
                    .find_by_slot(new_role.chapter_id, new_role.role_type)
                    .await?
                    .map_or(new_role.member_id, |a| a.member_id);
                return Err(bng_core::error::DomainError::RoleSlotOccupied {
                    role_type: new_role.role_type.as_str().to_string(),
                    holder,
                });
            }
            Err(e) => return Err(map_db_error(e)),
        };

        sqlx::query(
            r#"
            INSERT INTO chapter_role_history
                (role_id, member_id, chapter_id, role_type, action,
                 performed_by_id, performed_by_name, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NULL)
            "#,
        )
        .bind(model.id)
        .bind(model.member_id)
        .bind(model.chapter_id)
        .bind(new_role.role_type.as_str())
        .bind(RoleAction::Assigned.as_str())
        .bind(actor.performed_by_id.map(MemberId::into_inner))
        .bind(&actor.performed_by_name)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        ChapterRoleAssignment::try_from(model)
    }

    #[instrument(skip(self, actor), fields(assignment_id = %assignment.id))]
    async fn remove(
        &self,
        assignment: &ChapterRoleAssignment,
        actor: &Actor,
    ) -> RepoResult<DateTime<Utc>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let now = Utc::now();

        let closed = sqlx::query(
            r#"
            UPDATE chapter_role_history
            SET action = $1, end_date = $2
            WHERE chapter_id = $3 AND role_type = $4
              AND action = $5 AND end_date IS NULL
            "#,
        )
        .bind(RoleAction::Removed.as_str())
        .bind(now)
        .bind(assignment.chapter_id.into_inner())
        .bind(assignment.role_type.as_str())
        .bind(RoleAction::Assigned.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if closed.rows_affected() == 0 {
            // Live row without an open interval: pre-existing inconsistency.
            // Record the removal anyway so the ledger stays complete.
            warn!(
                chapter_id = %assignment.chapter_id,
                role_type = %assignment.role_type.as_str(),
                "no open history interval for live assignment, writing compensating record"
            );
            sqlx::query(
                r#"
                INSERT INTO chapter_role_history
                    (role_id, member_id, chapter_id, role_type, action,
                     performed_by_id, performed_by_name, start_date, end_date)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
                "#,
            )
            .bind(assignment.id.into_inner())
            .bind(assignment.member_id.into_inner())
            .bind(assignment.chapter_id.into_inner())
            .bind(assignment.role_type.as_str())
            .bind(RoleAction::RemovedDirectAction.as_str())
            .bind(actor.performed_by_id.map(MemberId::into_inner))
            .bind(&actor.performed_by_name)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        let deleted = sqlx::query(
            r#"
            DELETE FROM chapter_role_assignments
            WHERE id = $1
            "#,
        )
        .bind(assignment.id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if deleted.rows_affected() == 0 {
            return Err(super::error::assignment_not_found(assignment.id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(now)
    }

    #[instrument(skip(self))]
    async fn history_by_chapter(
        &self,
        chapter_id: ChapterId,
    ) -> RepoResult<Vec<ChapterRoleHistoryEntry>> {
        let results = sqlx::query_as::<_, ChapterRoleHistoryModel>(
            r#"
            SELECT id, role_id, member_id, chapter_id, role_type, action,
                   performed_by_id, performed_by_name, start_date, end_date
            FROM chapter_role_history
            WHERE chapter_id = $1
            ORDER BY start_date DESC, id DESC
            "#,
        )
        .bind(chapter_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(ChapterRoleHistoryEntry::try_from)
            .collect()
    }
}
