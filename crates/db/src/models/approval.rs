//! Director approval models and DTOs.

use chrono::NaiveDate;
use meetplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `approvals` table: one director's response to one
/// review meeting. At most one row exists per (meeting, director).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Approval {
    pub id: DbId,
    pub review_meeting_id: DbId,
    pub director_name: String,
    pub status: String,
    pub comment: Option<String>,
    pub suggested_date: Option<NaiveDate>,
    pub suggested_time: Option<String>,
    pub submitted_at: Timestamp,
}

/// DTO for recording (or overwriting) a director's response.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertApproval {
    pub director_name: String,
    pub status: String,
    pub comment: Option<String>,
    pub suggested_date: Option<NaiveDate>,
    pub suggested_time: Option<String>,
}
