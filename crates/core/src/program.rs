//! Program records as produced by spreadsheet ingestion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// The four program categories the institute runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "Spring Program")]
    SpringProgram,
    #[serde(rename = "Fall Program")]
    FallProgram,
    #[serde(rename = "Workshop")]
    Workshop,
    #[serde(rename = "Summer Conference")]
    SummerConference,
}

impl ProgramType {
    /// Human-readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ProgramType::SpringProgram => "Spring Program",
            ProgramType::FallProgram => "Fall Program",
            ProgramType::Workshop => "Workshop",
            ProgramType::SummerConference => "Summer Conference",
        }
    }

    /// Synthetic program name used when a meeting is shared across every
    /// program of this category in a batch.
    pub fn shared_group_label(&self) -> &'static str {
        match self {
            ProgramType::SpringProgram => "All Spring Programs",
            ProgramType::FallProgram => "All Fall Programs",
            ProgramType::Workshop => "All Workshops",
            ProgramType::SummerConference => "All Summer Conferences",
        }
    }

    /// Synthetic program id matching [`Self::shared_group_label`].
    pub fn shared_group_id(&self) -> &'static str {
        match self {
            ProgramType::SpringProgram => "all-spring",
            ProgramType::FallProgram => "all-fall",
            ProgramType::Workshop => "all-workshops",
            ProgramType::SummerConference => "all-summer",
        }
    }
}

/// A scheduled institutional activity, immutable once the meeting set
/// builder runs. Start/end dates may be absent when the source spreadsheet
/// row could not be parsed; such programs produce no meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: DbId,
    pub name: String,
    pub program_type: ProgramType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub organizer: String,
    pub confirmed: bool,
    pub year: i32,
}
