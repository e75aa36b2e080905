//! Review and review-meeting models and DTOs.

use chrono::NaiveDate;
use meetplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: Uuid,
    pub created_by: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub status: String,
}

/// A row from the `review_meetings` table.
///
/// Meetings are snapshotted into the review at share time; later edits to
/// the administrator's working set do not touch these rows unless synced.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewMeeting {
    pub id: DbId,
    pub review_id: Uuid,
    pub source_meeting_id: DbId,
    pub meeting_type: String,
    pub program_name: String,
    pub program_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    pub participants: serde_json::Value,
    pub description: Option<String>,
}

/// DTO for snapshotting one meeting into a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewMeeting {
    pub source_meeting_id: DbId,
    pub meeting_type: String,
    pub program_name: String,
    pub program_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub participants: Vec<String>,
    pub description: Option<String>,
}

/// Field patch applied when syncing an admin-side edit into a review
/// meeting. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingFieldPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

impl MeetingFieldPatch {
    /// True when no field is present, i.e. the patch would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.duration_minutes.is_none()
            && self.description.is_none()
    }
}
