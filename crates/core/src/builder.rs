//! Meeting set builder: expands a program batch into a sorted list of
//! future meeting instances.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::derive;
use crate::meeting::{MeetingInstance, MeetingStatus};
use crate::program::{Program, ProgramType};
use crate::rules::{self, LeadTime, MeetingRule};
use crate::types::DbId;

/// Clock time applied when a non-recurring rule has none.
pub const DEFAULT_MEETING_TIME: &str = "14:00";

/// Clock time applied when a recurring rule has none.
pub const DEFAULT_RECURRING_TIME: &str = "09:00";

/// Build the full meeting set for a program batch.
///
/// Pure and re-run-from-scratch: ids restart at 1 on every call and no
/// state from a previous build is carried forward. Instances dated before
/// `today` are dropped; the result is sorted by (date, time).
///
/// Shared rules (`shared_across_instances`) materialize once per
/// (program type, rule name, lead time) across the whole batch, taking
/// their date from whichever matching program comes first.
pub fn build(programs: &[Program], today: NaiveDate) -> Vec<MeetingInstance> {
    let mut meetings: Vec<MeetingInstance> = Vec::new();
    let mut next_id: DbId = 1;
    let mut shared_seen: HashSet<(ProgramType, &'static str, LeadTime)> = HashSet::new();

    for program in programs {
        for rule in rules::rules_for(program.program_type) {
            if rule.shared_across_instances {
                let key = (program.program_type, rule.type_name, rule.lead_time);
                if shared_seen.contains(&key) {
                    continue;
                }
                let Some(date) = derive::derive_single(program, rule) else {
                    continue;
                };
                shared_seen.insert(key);
                let mut shared = instance(next_id, program, rule, date, DEFAULT_MEETING_TIME);
                shared.program_id = program.program_type.shared_group_id().to_string();
                shared.program_name = program.program_type.shared_group_label().to_string();
                meetings.push(shared);
                next_id += 1;
                continue;
            }

            if rule.recurrence.is_some() {
                // Weekly expansion applies to summer conferences only.
                if program.program_type != ProgramType::SummerConference {
                    continue;
                }
                for date in derive::derive_weekly(program, rule) {
                    meetings.push(instance(next_id, program, rule, date, DEFAULT_RECURRING_TIME));
                    next_id += 1;
                }
                continue;
            }

            if let Some(date) = derive::derive_single(program, rule) {
                meetings.push(instance(next_id, program, rule, date, DEFAULT_MEETING_TIME));
                next_id += 1;
            }
        }
    }

    meetings.retain(|m| m.date >= today);
    meetings.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    meetings
}

fn instance(
    id: DbId,
    program: &Program,
    rule: &MeetingRule,
    date: NaiveDate,
    default_time: &str,
) -> MeetingInstance {
    let program_year = program
        .start_date
        .map(|d| d.year())
        .unwrap_or(program.year);

    MeetingInstance {
        id,
        program_id: program.id.to_string(),
        program_name: program.name.clone(),
        program_type: program.program_type,
        program_year,
        meeting_type: rule.type_name.to_string(),
        date,
        time: rule.time.unwrap_or(default_time).to_string(),
        duration_minutes: rule.duration_minutes,
        participants: rule.participants.iter().map(|p| p.to_string()).collect(),
        description: rule.description.to_string(),
        status: MeetingStatus::Pending,
        approved: false,
    }
}
