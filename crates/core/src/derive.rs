//! Date derivation: maps (program, rule) to concrete meeting dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::program::{Program, ProgramType};
use crate::rules::{LeadTime, MeetingRule};

/// Weekly recurrence never expands past this many occurrences, regardless
/// of the program span.
pub const MAX_WEEKLY_OCCURRENCES: usize = 2;

/// Days subtracted from the program end for fall-side evaluation meetings.
const EVALUATION_END_OFFSET_DAYS: i64 = 7;

/// Fallback offset for spring-side evaluations whose April 20 anchor would
/// precede the program's own start.
const EVALUATION_SPRING_FALLBACK_DAYS: i64 = 90;

/// Derive the date for a single (non-recurring) rule.
///
/// Returns `None` when the program has no start date, or when an
/// evaluation rule cannot be placed (fall-side program without an end
/// date, or a category that has no evaluation meeting).
pub fn derive_single(program: &Program, rule: &MeetingRule) -> Option<NaiveDate> {
    let start = program.start_date?;

    let candidate = match rule.lead_time {
        LeadTime::ProgramEnd => return evaluation_date(program),
        LeadTime::Days(days) => start + Duration::days(days),
    };

    Some(match rule.weekday {
        Some(target) => snap_to_weekday(candidate, target),
        None => candidate,
    })
}

/// Expand a weekly rule over the program span, capped at
/// [`MAX_WEEKLY_OCCURRENCES`]. Requires both a start and an end date.
pub fn derive_weekly(program: &Program, rule: &MeetingRule) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (program.start_date, program.end_date) else {
        return Vec::new();
    };
    let Some(target) = rule.weekday else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end && dates.len() < MAX_WEEKLY_OCCURRENCES {
        if day.weekday() == target {
            dates.push(day);
        }
        day += Duration::days(1);
    }
    dates
}

/// Snap `date` to the nearest occurrence of `target`, staying within three
/// days of the candidate: an offset beyond +3 wraps to the previous week,
/// beyond -3 to the next week.
fn snap_to_weekday(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut offset =
        target.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;
    if offset > 3 {
        offset -= 7;
    } else if offset < -3 {
        offset += 7;
    }
    date + Duration::days(offset)
}

/// Placement for evaluation meetings (`LeadTime::ProgramEnd`).
///
/// Spring-side programs (start month up to June) anchor on April 20 of the
/// start year unless that would precede the program start, in which case
/// the meeting lands 90 days after the start. Fall-side programs meet one
/// week before the program end; without an end date no meeting is placed.
/// No weekday snap is applied on this path.
fn evaluation_date(program: &Program) -> Option<NaiveDate> {
    match program.program_type {
        ProgramType::SpringProgram | ProgramType::FallProgram => {}
        _ => return None,
    }
    let start = program.start_date?;

    if start.month() <= 6 {
        let anchor = NaiveDate::from_ymd_opt(start.year(), 4, 20)?;
        if anchor > start {
            Some(anchor)
        } else {
            Some(start + Duration::days(EVALUATION_SPRING_FALLBACK_DAYS))
        }
    } else {
        program
            .end_date
            .map(|end| end - Duration::days(EVALUATION_END_OFFSET_DAYS))
    }
}
