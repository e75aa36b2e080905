//! Static meeting rule table, keyed by program category.
//!
//! Each rule is a template for one recurring meeting type: how far from the
//! program start it lands, which weekday it prefers, who attends. The table
//! is data only; placement logic lives in [`crate::derive`].

use chrono::Weekday;

use crate::program::ProgramType;

/// Day offset from the program start used to place a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadTime {
    /// Signed offset in days (negative = before the program starts).
    Days(i64),
    /// Sentinel for evaluation meetings placed relative to the program end.
    ProgramEnd,
}

/// Recurrence pattern for rules that expand to multiple instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Weekly,
}

/// One meeting type template for a program category.
#[derive(Debug, Clone)]
pub struct MeetingRule {
    pub type_name: &'static str,
    pub lead_time: LeadTime,
    pub weekday: Option<Weekday>,
    /// Clock time as `HH:MM`; the builder applies a default when unset.
    pub time: Option<&'static str>,
    pub duration_minutes: i32,
    pub participants: &'static [&'static str],
    pub description: &'static str,
    pub recurrence: Option<Recurrence>,
    /// When set, one instance represents every program of the category in a
    /// batch instead of one instance per program.
    pub shared_across_instances: bool,
}

/// Meeting templates shared by spring and fall programs.
const SPRING_FALL_RULES: &[MeetingRule] = &[
    MeetingRule {
        type_name: "Introduction Meeting",
        lead_time: LeadTime::Days(-540),
        weekday: Some(Weekday::Fri),
        time: Some("10:00"),
        duration_minutes: 30,
        participants: &["Program Organizers", "Directors", "Admin Coordinator"],
        description: "Initial program planning and expectations",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Check-in meeting with organizers",
        lead_time: LeadTime::Days(-180),
        weekday: Some(Weekday::Fri),
        time: Some("10:00"),
        duration_minutes: 30,
        participants: &["Program Organizers", "Admin Team", "Directors"],
        description: "Review preparations and logistics",
        recurrence: None,
        shared_across_instances: false,
    },
    // Same day as the organizer check-in, right after.
    MeetingRule {
        type_name: "Check-in meeting junior fellows",
        lead_time: LeadTime::Days(-180),
        weekday: Some(Weekday::Fri),
        time: Some("10:30"),
        duration_minutes: 30,
        participants: &["Junior Fellows", "Admin Team"],
        description: "Junior fellow orientation and support",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Onboarding meeting",
        lead_time: LeadTime::Days(3),
        weekday: Some(Weekday::Fri),
        time: None,
        duration_minutes: 30,
        participants: &["Admin Team", "Organizers", "Directors"],
        description: "Practical information and house rules",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Program Start Meeting",
        lead_time: LeadTime::Days(4),
        weekday: Some(Weekday::Tue),
        time: Some("09:00"),
        duration_minutes: 30,
        participants: &["Program Organizers", "All Participants", "Directors"],
        description: "Official program kickoff",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Mid-term meeting",
        lead_time: LeadTime::Days(42),
        weekday: Some(Weekday::Fri),
        time: None,
        duration_minutes: 30,
        participants: &["Program Organizers", "Admin Team", "Directors"],
        description: "Progress check and adjustments",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Evaluation meeting",
        lead_time: LeadTime::ProgramEnd,
        weekday: Some(Weekday::Fri),
        time: None,
        duration_minutes: 30,
        participants: &["Program Organizers", "Admin Team", "Directors"],
        description: "Program evaluation and feedback",
        recurrence: None,
        shared_across_instances: false,
    },
];

const WORKSHOP_RULES: &[MeetingRule] = &[
    MeetingRule {
        type_name: "Meeting with organizer and B&P",
        lead_time: LeadTime::Days(-120),
        weekday: Some(Weekday::Fri),
        time: None,
        duration_minutes: 30,
        participants: &["Event Organizer", "B&P Team", "Admin Coordinator"],
        description: "Budget and planning coordination",
        recurrence: None,
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Check-in meeting with Organizer",
        lead_time: LeadTime::Days(-45),
        weekday: Some(Weekday::Fri),
        time: None,
        duration_minutes: 30,
        participants: &["Event Organizer", "Admin Team"],
        description: "Final preparations and logistics",
        recurrence: None,
        shared_across_instances: true,
    },
];

const SUMMER_CONFERENCE_RULES: &[MeetingRule] = &[
    MeetingRule {
        type_name: "Introduction Meeting - Group 1",
        lead_time: LeadTime::Days(-240),
        weekday: Some(Weekday::Fri),
        time: Some("10:00"),
        duration_minutes: 30,
        participants: &["Conference Organizer Group 1", "Admin Team"],
        description: "Initial planning for first conference group",
        recurrence: None,
        shared_across_instances: true,
    },
    MeetingRule {
        type_name: "Introduction Meeting - Group 2",
        lead_time: LeadTime::Days(-240),
        weekday: Some(Weekday::Fri),
        time: Some("15:00"),
        duration_minutes: 30,
        participants: &["Conference Organizer Group 2", "Admin Team"],
        description: "Initial planning for second conference group",
        recurrence: None,
        shared_across_instances: true,
    },
    MeetingRule {
        type_name: "Check-in Meeting - Group 1",
        lead_time: LeadTime::Days(-90),
        weekday: Some(Weekday::Fri),
        time: Some("10:00"),
        duration_minutes: 30,
        participants: &["Conference Organizer Group 1", "Admin Team"],
        description: "Pre-conference preparations review",
        recurrence: None,
        shared_across_instances: true,
    },
    MeetingRule {
        type_name: "Check-in Meeting - Group 2",
        lead_time: LeadTime::Days(-90),
        weekday: Some(Weekday::Fri),
        time: Some("10:30"),
        duration_minutes: 30,
        participants: &["Conference Organizer Group 2", "Admin Team"],
        description: "Pre-conference preparations review",
        recurrence: None,
        shared_across_instances: true,
    },
    MeetingRule {
        type_name: "Weekly Onboarding meeting light",
        lead_time: LeadTime::Days(0),
        weekday: Some(Weekday::Mon),
        time: Some("09:30"),
        duration_minutes: 30,
        participants: &["Organizers", "Admin Team"],
        description: "Weekly orientation for new participants",
        recurrence: Some(Recurrence::Weekly),
        shared_across_instances: false,
    },
    MeetingRule {
        type_name: "Weekly Welcome Meeting",
        lead_time: LeadTime::Days(0),
        weekday: Some(Weekday::Mon),
        time: Some("10:00"),
        duration_minutes: 15,
        participants: &["All Conference Participants"],
        description: "Weekly welcome and updates",
        recurrence: Some(Recurrence::Weekly),
        shared_across_instances: false,
    },
];

/// The ordered rule list for a program category.
pub fn rules_for(program_type: ProgramType) -> &'static [MeetingRule] {
    match program_type {
        ProgramType::SpringProgram | ProgramType::FallProgram => SPRING_FALL_RULES,
        ProgramType::Workshop => WORKSHOP_RULES,
        ProgramType::SummerConference => SUMMER_CONFERENCE_RULES,
    }
}
