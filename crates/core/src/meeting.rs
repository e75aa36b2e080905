//! Concrete meeting instances produced by the meeting set builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::program::ProgramType;
use crate::types::DbId;

/// Administrator-side lifecycle state of a meeting instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingStatus {
    Pending,
    Approved,
    Scheduled,
    AlreadyScheduled,
}

impl MeetingStatus {
    /// Kebab-case form, matching the serialized wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "pending",
            MeetingStatus::Approved => "approved",
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::AlreadyScheduled => "already-scheduled",
        }
    }
}

/// A dated meeting derived from one rule applied to one program (or, for
/// shared rules, to a whole program category).
///
/// `program_id` is the originating program's id rendered as a string, or a
/// synthetic group id such as `all-summer` for shared instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingInstance {
    pub id: DbId,
    pub program_id: String,
    pub program_name: String,
    pub program_type: ProgramType,
    pub program_year: i32,
    pub meeting_type: String,
    pub date: NaiveDate,
    /// Clock time as `HH:MM`, kept as text end to end.
    pub time: String,
    pub duration_minutes: i32,
    pub participants: Vec<String>,
    pub description: String,
    pub status: MeetingStatus,
    pub approved: bool,
}
