//! Repository for the `approvals` table.

use meetplan_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::approval::{Approval, UpsertApproval};

/// Column list for approvals queries.
const APPROVAL_COLUMNS: &str = "id, review_meeting_id, director_name, status, \
    comment, suggested_date, suggested_time, submitted_at";

/// Provides CRUD operations for director approvals.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Record a director's response, overwriting their previous response
    /// to the same meeting if one exists.
    pub async fn upsert(
        pool: &PgPool,
        review_meeting_id: DbId,
        input: &UpsertApproval,
    ) -> Result<Approval, sqlx::Error> {
        let query = format!(
            "INSERT INTO approvals
                (review_meeting_id, director_name, status, comment,
                 suggested_date, suggested_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_approvals_meeting_director DO UPDATE SET
                status = EXCLUDED.status,
                comment = EXCLUDED.comment,
                suggested_date = EXCLUDED.suggested_date,
                suggested_time = EXCLUDED.suggested_time,
                submitted_at = now()
             RETURNING {APPROVAL_COLUMNS}"
        );
        sqlx::query_as::<_, Approval>(&query)
            .bind(review_meeting_id)
            .bind(&input.director_name)
            .bind(&input.status)
            .bind(&input.comment)
            .bind(input.suggested_date)
            .bind(&input.suggested_time)
            .fetch_one(pool)
            .await
    }

    /// List responses to one meeting, newest first.
    pub async fn list_for_meeting(
        pool: &PgPool,
        review_meeting_id: DbId,
    ) -> Result<Vec<Approval>, sqlx::Error> {
        let query = format!(
            "SELECT {APPROVAL_COLUMNS} FROM approvals
             WHERE review_meeting_id = $1
             ORDER BY submitted_at DESC"
        );
        sqlx::query_as::<_, Approval>(&query)
            .bind(review_meeting_id)
            .fetch_all(pool)
            .await
    }

    /// List every response across a review's meetings.
    pub async fn list_for_review(
        pool: &PgPool,
        review_id: Uuid,
    ) -> Result<Vec<Approval>, sqlx::Error> {
        sqlx::query_as::<_, Approval>(
            "SELECT a.id, a.review_meeting_id, a.director_name, a.status,
                    a.comment, a.suggested_date, a.suggested_time, a.submitted_at
             FROM approvals a
             JOIN review_meetings m ON m.id = a.review_meeting_id
             WHERE m.review_id = $1
             ORDER BY a.submitted_at DESC",
        )
        .bind(review_id)
        .fetch_all(pool)
        .await
    }

    /// Number of responses recorded against one meeting.
    pub async fn count_for_meeting(
        pool: &PgPool,
        review_meeting_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM approvals WHERE review_meeting_id = $1")
            .bind(review_meeting_id)
            .fetch_one(pool)
            .await
    }

    /// Delete one director's response to one meeting.
    pub async fn delete_one(
        pool: &PgPool,
        review_meeting_id: DbId,
        director_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM approvals WHERE review_meeting_id = $1 AND director_name = $2",
        )
        .bind(review_meeting_id)
        .bind(director_name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete every response to one meeting.
    pub async fn delete_for_meeting(
        pool: &PgPool,
        review_meeting_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM approvals WHERE review_meeting_id = $1")
            .bind(review_meeting_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete one director's responses across an entire review.
    pub async fn delete_by_director(
        pool: &PgPool,
        review_id: Uuid,
        director_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM approvals a
             USING review_meetings m
             WHERE a.review_meeting_id = m.id
               AND m.review_id = $1
               AND a.director_name = $2",
        )
        .bind(review_id)
        .bind(director_name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
