use crate::constants::TBA_PATTERN;
use crate::records::SectionRecord;
use crate::types::{MeetingTime, PlanError, Section, SectionType, Weekdays};
use crate::{types, util};

/// Parses one textual meeting pattern into a [`MeetingTime`].
///
/// The accepted grammar is either the literal `TBA`, or
/// `<DAYS> <START>-<END>` where `DAYS` is a run of two-letter weekday
/// codes (`MoWeFr`) and the times are 12-hour clock times with an `AM`
/// or `PM` suffix (`10:00AM`). Whitespace may appear around the dash.
///
/// # Parameters
/// - `text`: The meeting pattern.
///
/// # Returns
/// The parsed meeting time, or [`PlanError::MalformedMeeting`] describing
/// what was wrong with the pattern.
pub fn parse_meeting(text: &str) -> types::Result<MeetingTime> {
    let trimmed = text.trim();
    if trimmed == TBA_PATTERN {
        return Ok(MeetingTime::Tba);
    }

    parse_scheduled(trimmed).map_err(|reason| PlanError::MalformedMeeting {
        text: text.to_string(),
        reason,
    })
}

fn parse_scheduled(text: &str) -> Result<MeetingTime, &'static str> {
    let (day_part, time_part) = text
        .split_once(char::is_whitespace)
        .ok_or("expected '<days> <start>-<end>'")?;
    let days = parse_day_codes(day_part)?;

    let (start_text, end_text) = time_part
        .split_once('-')
        .ok_or("expected a '-' between the start and end times")?;
    let start =
        util::parse_clock_12hr(start_text).ok_or("the start is not a valid 12-hour clock time")?;
    let end =
        util::parse_clock_12hr(end_text).ok_or("the end is not a valid 12-hour clock time")?;
    if start > end {
        return Err("the start time is after the end time");
    }

    Ok(MeetingTime::Scheduled { days, start, end })
}

/// Splits a run of two-letter weekday codes, e.g. `MoWeFr`, into a weekday
/// set. Codes may repeat; the result is their union.
fn parse_day_codes(text: &str) -> Result<Weekdays, &'static str> {
    if text.is_empty() || text.len() % 2 != 0 {
        return Err("weekday codes must be two letters each");
    }

    let mut days = Weekdays::empty();
    for chunk in text.as_bytes().chunks(2) {
        let code = std::str::from_utf8(chunk).map_err(|_| "unrecognized weekday code")?;
        days |= Weekdays::from_code(code).ok_or("unrecognized weekday code")?;
    }

    Ok(days)
}

/// Turns one raw catalog record into a clean [`Section`], parsing its
/// section type and every meeting pattern.
///
/// # Parameters
/// - `record`: The raw record.
///
/// # Returns
/// The section, or the first error hit while parsing the record.
pub fn parse_section(record: SectionRecord) -> types::Result<Section> {
    let section_type = SectionType::from_name(&record.section_type).ok_or(
        PlanError::InvalidArguments("section_type", "not a recognized section type"),
    )?;
    let meetings = record
        .meetings
        .iter()
        .map(|pattern| parse_meeting(pattern))
        .collect::<types::Result<Vec<_>>>()?;

    Ok(Section {
        section_id: record.section_id,
        subject_code: record.subject_code,
        course_code: record.course_code,
        section_code: record.section_code,
        section_type,
        all_instructors: record.instructors,
        status: record.status,
        meetings,
    })
}
