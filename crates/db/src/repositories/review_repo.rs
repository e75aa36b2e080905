//! Repository for the `reviews` and `review_meetings` tables.

use chrono::{Duration, Utc};
use meetplan_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::review::{CreateReviewMeeting, MeetingFieldPatch, Review, ReviewMeeting};

/// Column list for reviews queries.
const REVIEW_COLUMNS: &str = "id, created_by, created_at, expires_at, status";

/// Column list for review_meetings queries.
const MEETING_COLUMNS: &str = "id, review_id, source_meeting_id, meeting_type, \
    program_name, program_type, date, time, duration_minutes, participants, description";

/// Review links expire this many days after creation.
const REVIEW_TTL_DAYS: i64 = 30;

/// Provides CRUD operations for reviews and their meeting snapshots.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a review with a fresh token and snapshot the given meetings
    /// into it, all in one transaction.
    pub async fn create(
        pool: &PgPool,
        created_by: &str,
        meetings: &[CreateReviewMeeting],
    ) -> Result<Review, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let query = format!(
            "INSERT INTO reviews (id, created_by, created_at, expires_at, status)
             VALUES ($1, $2, $3, $4, 'active')
             RETURNING {REVIEW_COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(created_by)
            .bind(now)
            .bind(now + Duration::days(REVIEW_TTL_DAYS))
            .fetch_one(&mut *tx)
            .await?;

        for meeting in meetings {
            Self::insert_meeting(&mut tx, id, meeting).await?;
        }

        tx.commit().await?;
        Ok(review)
    }

    /// Find a review by its token.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a review's meetings in presentation order (date, then time).
    pub async fn list_meetings(
        pool: &PgPool,
        review_id: Uuid,
    ) -> Result<Vec<ReviewMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM review_meetings
             WHERE review_id = $1
             ORDER BY date ASC, time ASC"
        );
        sqlx::query_as::<_, ReviewMeeting>(&query)
            .bind(review_id)
            .fetch_all(pool)
            .await
    }

    /// Find one meeting within a review. The review id is part of the key
    /// so a meeting id from another review resolves to nothing.
    pub async fn find_meeting(
        pool: &PgPool,
        review_id: Uuid,
        meeting_id: DbId,
    ) -> Result<Option<ReviewMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM review_meetings
             WHERE review_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, ReviewMeeting>(&query)
            .bind(review_id)
            .bind(meeting_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a review's entire meeting set. Deleting the old rows
    /// cascades to their approvals, so responses to dropped meetings do
    /// not linger.
    pub async fn replace_meetings(
        pool: &PgPool,
        review_id: Uuid,
        meetings: &[CreateReviewMeeting],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM review_meetings WHERE review_id = $1")
            .bind(review_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = 0u64;
        for meeting in meetings {
            Self::insert_meeting(&mut tx, review_id, meeting).await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Update one meeting's description, returning the number of rows
    /// affected (zero when the meeting is not in this review).
    pub async fn update_description(
        pool: &PgPool,
        review_id: Uuid,
        meeting_id: DbId,
        description: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE review_meetings SET description = $3
             WHERE review_id = $1 AND id = $2",
        )
        .bind(review_id)
        .bind(meeting_id)
        .bind(description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Apply a field patch to the meetings matching (program_name,
    /// meeting_type). Matching is two-pass: exact first, then
    /// case-insensitive with surrounding whitespace ignored, so sync
    /// still lands when the admin side normalized names differently.
    pub async fn update_by_characteristics(
        pool: &PgPool,
        review_id: Uuid,
        program_name: &str,
        meeting_type: &str,
        patch: &MeetingFieldPatch,
    ) -> Result<u64, sqlx::Error> {
        let exact = sqlx::query(
            "UPDATE review_meetings SET
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                duration_minutes = COALESCE($6, duration_minutes),
                description = COALESCE($7, description)
             WHERE review_id = $1 AND program_name = $2 AND meeting_type = $3",
        )
        .bind(review_id)
        .bind(program_name)
        .bind(meeting_type)
        .bind(patch.date)
        .bind(&patch.time)
        .bind(patch.duration_minutes)
        .bind(&patch.description)
        .execute(pool)
        .await?;
        if exact.rows_affected() > 0 {
            return Ok(exact.rows_affected());
        }

        let relaxed = sqlx::query(
            "UPDATE review_meetings SET
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                duration_minutes = COALESCE($6, duration_minutes),
                description = COALESCE($7, description)
             WHERE review_id = $1
               AND LOWER(TRIM(program_name)) = LOWER(TRIM($2))
               AND LOWER(TRIM(meeting_type)) = LOWER(TRIM($3))",
        )
        .bind(review_id)
        .bind(program_name)
        .bind(meeting_type)
        .bind(patch.date)
        .bind(&patch.time)
        .bind(patch.duration_minutes)
        .bind(&patch.description)
        .execute(pool)
        .await?;
        Ok(relaxed.rows_affected())
    }

    /// Apply a field patch to the meeting carrying a given source id.
    /// Fallback path for callers that cannot supply characteristics.
    pub async fn update_by_source_id(
        pool: &PgPool,
        review_id: Uuid,
        source_meeting_id: DbId,
        patch: &MeetingFieldPatch,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE review_meetings SET
                date = COALESCE($3, date),
                time = COALESCE($4, time),
                duration_minutes = COALESCE($5, duration_minutes),
                description = COALESCE($6, description)
             WHERE review_id = $1 AND source_meeting_id = $2",
        )
        .bind(review_id)
        .bind(source_meeting_id)
        .bind(patch.date)
        .bind(&patch.time)
        .bind(patch.duration_minutes)
        .bind(&patch.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Locate a meeting by (program_name, meeting_type), exact match
    /// first, then case/whitespace-insensitive.
    pub async fn find_by_characteristics(
        pool: &PgPool,
        review_id: Uuid,
        program_name: &str,
        meeting_type: &str,
    ) -> Result<Option<ReviewMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM review_meetings
             WHERE review_id = $1 AND program_name = $2 AND meeting_type = $3
             ORDER BY id ASC
             LIMIT 1"
        );
        if let Some(meeting) = sqlx::query_as::<_, ReviewMeeting>(&query)
            .bind(review_id)
            .bind(program_name)
            .bind(meeting_type)
            .fetch_optional(pool)
            .await?
        {
            return Ok(Some(meeting));
        }

        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM review_meetings
             WHERE review_id = $1
               AND LOWER(TRIM(program_name)) = LOWER(TRIM($2))
               AND LOWER(TRIM(meeting_type)) = LOWER(TRIM($3))
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, ReviewMeeting>(&query)
            .bind(review_id)
            .bind(program_name)
            .bind(meeting_type)
            .fetch_optional(pool)
            .await
    }

    /// Locate the meeting carrying a given source id.
    pub async fn find_by_source_id(
        pool: &PgPool,
        review_id: Uuid,
        source_meeting_id: DbId,
    ) -> Result<Option<ReviewMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM review_meetings
             WHERE review_id = $1 AND source_meeting_id = $2
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, ReviewMeeting>(&query)
            .bind(review_id)
            .bind(source_meeting_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove duplicate meetings within a review, keeping the
    /// lowest-id row of each (program_name, meeting_type) group.
    /// Returns (removed, remaining).
    pub async fn deduplicate(pool: &PgPool, review_id: Uuid) -> Result<(u64, i64), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query(
            "DELETE FROM review_meetings a
             USING review_meetings b
             WHERE a.review_id = $1
               AND b.review_id = $1
               AND a.program_name = b.program_name
               AND a.meeting_type = b.meeting_type
               AND a.id > b.id",
        )
        .bind(review_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM review_meetings WHERE review_id = $1")
                .bind(review_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok((removed, remaining))
    }

    async fn insert_meeting(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        review_id: Uuid,
        meeting: &CreateReviewMeeting,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO review_meetings
                (review_id, source_meeting_id, meeting_type, program_name, program_type,
                 date, time, duration_minutes, participants, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(review_id)
        .bind(meeting.source_meeting_id)
        .bind(&meeting.meeting_type)
        .bind(&meeting.program_name)
        .bind(&meeting.program_type)
        .bind(meeting.date)
        .bind(&meeting.time)
        .bind(meeting.duration_minutes)
        .bind(serde_json::json!(meeting.participants))
        .bind(&meeting.description)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
