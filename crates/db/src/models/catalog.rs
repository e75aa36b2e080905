//! Catalog snapshot models: the administrator's durable programs and
//! working meeting set, saved wholesale and reloaded across sessions.

use chrono::NaiveDate;
use meetplan_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramRow {
    pub id: DbId,
    pub source_id: DbId,
    pub name: String,
    pub program_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub organizer: String,
    pub confirmed: bool,
    pub year: i32,
}

/// A row from the `program_meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramMeetingRow {
    pub id: DbId,
    pub source_meeting_id: DbId,
    pub program_id: String,
    pub program_name: String,
    pub program_type: String,
    pub program_year: i32,
    pub meeting_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    pub participants: serde_json::Value,
    pub description: Option<String>,
    pub status: String,
    pub approved: bool,
}
