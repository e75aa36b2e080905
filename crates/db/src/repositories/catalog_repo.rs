//! Repository for the catalog snapshot tables (`programs` and
//! `program_meetings`).

use meetplan_core::meeting::MeetingInstance;
use meetplan_core::program::Program;
use sqlx::PgPool;

use crate::models::catalog::{ProgramMeetingRow, ProgramRow};

const PROGRAM_COLUMNS: &str =
    "id, source_id, name, program_type, start_date, end_date, organizer, confirmed, year";

const MEETING_COLUMNS: &str = "id, source_meeting_id, program_id, program_name, program_type, \
    program_year, meeting_type, date, time, duration_minutes, participants, description, \
    status, approved";

/// Provides snapshot save/load for the administrator's catalog.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Replace the stored snapshot with the given programs and meetings.
    /// The old snapshot is dropped entirely; partial merges are not a
    /// thing at this layer.
    pub async fn replace_snapshot(
        pool: &PgPool,
        programs: &[Program],
        meetings: &[MeetingInstance],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM program_meetings")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM programs").execute(&mut *tx).await?;

        for program in programs {
            sqlx::query(
                "INSERT INTO programs
                    (source_id, name, program_type, start_date, end_date,
                     organizer, confirmed, year)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(program.id)
            .bind(&program.name)
            .bind(program.program_type.label())
            .bind(program.start_date)
            .bind(program.end_date)
            .bind(&program.organizer)
            .bind(program.confirmed)
            .bind(program.year)
            .execute(&mut *tx)
            .await?;
        }

        for meeting in meetings {
            sqlx::query(
                "INSERT INTO program_meetings
                    (source_meeting_id, program_id, program_name, program_type,
                     program_year, meeting_type, date, time, duration_minutes,
                     participants, description, status, approved)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
            )
            .bind(meeting.id)
            .bind(&meeting.program_id)
            .bind(&meeting.program_name)
            .bind(meeting.program_type.label())
            .bind(meeting.program_year)
            .bind(&meeting.meeting_type)
            .bind(meeting.date)
            .bind(&meeting.time)
            .bind(meeting.duration_minutes)
            .bind(serde_json::json!(meeting.participants))
            .bind(&meeting.description)
            .bind(meeting.status.as_str())
            .bind(meeting.approved)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Load the stored snapshot.
    pub async fn load(pool: &PgPool) -> Result<(Vec<ProgramRow>, Vec<ProgramMeetingRow>), sqlx::Error> {
        let query = format!("SELECT {PROGRAM_COLUMNS} FROM programs ORDER BY id ASC");
        let programs = sqlx::query_as::<_, ProgramRow>(&query).fetch_all(pool).await?;

        let query = format!(
            "SELECT {MEETING_COLUMNS} FROM program_meetings ORDER BY date ASC, time ASC"
        );
        let meetings = sqlx::query_as::<_, ProgramMeetingRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok((programs, meetings))
    }
}
