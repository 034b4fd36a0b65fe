use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DAY_CODES;
use crate::parser;
use crate::util;

/// The generic type is the return value. Otherwise, regardless of operation,
/// we're just returning the error value if there is an error.
pub type Result<T, E = PlanError> = std::result::Result<T, E>;

/// The type that will be used to represent a minute of the day, counted
/// from midnight. Valid values lie in `[0, 1440]`.
pub type TimeType = u16;

/// The unique identifier of a section within one semester's catalog.
pub type SectionId = i64;

/// One generated schedule: the chosen section IDs, one per requested
/// group key, in the order the group keys were supplied.
pub type Schedule = Vec<SectionId>;

bitflags! {
    /// The set of weekdays on which a meeting takes place.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Weekdays: u8 {
        const Monday = 1 << 0;
        const Tuesday = 1 << 1;
        const Wednesday = 1 << 2;
        const Thursday = 1 << 3;
        const Friday = 1 << 4;
        const Saturday = 1 << 5;
        const Sunday = 1 << 6;
    }
}

impl Weekdays {
    /// Looks up a single weekday from its canonical two-letter code.
    ///
    /// # Parameters
    /// - `code`: The code, one of `Mo`, `Tu`, `We`, `Th`, `Fr`, `Sa`, `Su`.
    ///   Codes are case-sensitive.
    ///
    /// # Returns
    /// The matching one-day set, or `None` if the code isn't recognized.
    pub fn from_code(code: &str) -> Option<Weekdays> {
        DAY_CODES
            .iter()
            .find(|(name, _)| *name == code)
            .map(|(_, day)| *day)
    }
}

impl Display for Weekdays {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (code, day) in DAY_CODES {
            if self.contains(day) {
                write!(f, "{code}")?;
            }
        }
        Ok(())
    }
}

/// One meeting pattern of a section: a weekday set paired with a start/end
/// minute of the day, or `Tba` when the roster lists no fixed time.
///
/// A `Tba` meeting never has a time to compare against, so the conflict
/// check treats it as always colliding; a section carrying one can never
/// be placed into a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeetingTime {
    /// A fixed weekly meeting. `days` is non-empty and `start <= end`
    /// whenever this was produced by the parser.
    Scheduled {
        days: Weekdays,
        start: TimeType,
        end: TimeType,
    },
    /// The time is to be announced.
    Tba,
}

impl Display for MeetingTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingTime::Scheduled { days, start, end } => {
                write!(
                    f,
                    "{days} {}-{}",
                    util::minutes_to_12hr(*start),
                    util::minutes_to_12hr(*end)
                )
            }
            MeetingTime::Tba => write!(f, "TBA"),
        }
    }
}

impl FromStr for MeetingTime {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_meeting(s)
    }
}

/// The enrollment status of a section, as published on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    Open,
    Closed,
    #[serde(rename = "Wait List")]
    WaitList,
}

impl Display for SectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionStatus::Open => write!(f, "Open"),
            SectionStatus::Closed => write!(f, "Closed"),
            SectionStatus::WaitList => write!(f, "Wait List"),
        }
    }
}

/// The instruction type of a section. Together with the subject and course
/// codes, this names one choice slot in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    Lecture,
    Laboratory,
    Discussion,
    Drill,
    Seminar,
    Studio,
    Clinical,
    Practicum,
    Workshop,
    #[serde(rename = "Independent Study")]
    IndependentStudy,
}

impl SectionType {
    /// Parses a section type from its roster name, ignoring case.
    ///
    /// # Parameters
    /// - `name`: The roster name, e.g. `Lecture` or `Independent Study`.
    ///
    /// # Returns
    /// The section type, or `None` if the name isn't one of the known types.
    pub fn from_name(name: &str) -> Option<SectionType> {
        let name = name.trim().to_lowercase();
        let section_type = match name.as_str() {
            "lecture" => SectionType::Lecture,
            "laboratory" => SectionType::Laboratory,
            "discussion" => SectionType::Discussion,
            "drill" => SectionType::Drill,
            "seminar" => SectionType::Seminar,
            "studio" => SectionType::Studio,
            "clinical" => SectionType::Clinical,
            "practicum" => SectionType::Practicum,
            "workshop" => SectionType::Workshop,
            "independent study" => SectionType::IndependentStudy,
            _ => return None,
        };

        Some(section_type)
    }

    /// The lower-cased roster name, which is also the trailing fragment of
    /// a group key. Note that `Independent Study` keeps its inner space.
    pub fn as_key(&self) -> &'static str {
        match self {
            SectionType::Lecture => "lecture",
            SectionType::Laboratory => "laboratory",
            SectionType::Discussion => "discussion",
            SectionType::Drill => "drill",
            SectionType::Seminar => "seminar",
            SectionType::Studio => "studio",
            SectionType::Clinical => "clinical",
            SectionType::Practicum => "practicum",
            SectionType::Workshop => "workshop",
            SectionType::IndependentStudy => "independent study",
        }
    }
}

impl Display for SectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionType::Lecture => write!(f, "Lecture"),
            SectionType::Laboratory => write!(f, "Laboratory"),
            SectionType::Discussion => write!(f, "Discussion"),
            SectionType::Drill => write!(f, "Drill"),
            SectionType::Seminar => write!(f, "Seminar"),
            SectionType::Studio => write!(f, "Studio"),
            SectionType::Clinical => write!(f, "Clinical"),
            SectionType::Practicum => write!(f, "Practicum"),
            SectionType::Workshop => write!(f, "Workshop"),
            SectionType::IndependentStudy => write!(f, "Independent Study"),
        }
    }
}

/// One offered section of a course. The catalog groups sections by their
/// group key; the student picks exactly one section per group.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Section {
    /// The section ID, unique across all sections of the active semester.
    pub section_id: SectionId,
    /// The subject code. For example, `CS` or `MATH` are both possible options.
    pub subject_code: String,
    /// The course code. For example, `2110`.
    pub course_code: String,
    /// The section code. For example, `001`.
    pub section_code: String,
    /// The instruction type of this section.
    pub section_type: SectionType,
    /// All instructors teaching this section. May be empty.
    pub all_instructors: Vec<String>,
    /// The enrollment status of this section.
    pub status: SectionStatus,
    /// All meeting patterns of this section. An empty list is treated the
    /// same as a single `TBA` meeting.
    pub meetings: Vec<MeetingTime>,
}

impl Section {
    /// The key of the choice slot this section belongs to: the lower-cased
    /// concatenation of subject code, course code, and type name. For
    /// example, `cs2110lecture`.
    ///
    /// # Returns
    /// The group key.
    pub fn group_key(&self) -> String {
        format!(
            "{}{}{}",
            self.subject_code.to_lowercase(),
            self.course_code.to_lowercase(),
            self.section_type.as_key()
        )
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "[{} / {}] {} {} {}",
            self.section_code,
            self.section_id,
            self.subject_code,
            self.course_code,
            self.section_type
        )?;
        writeln!(f, "\tInstructors: [{}]", self.all_instructors.join(", "))?;
        writeln!(f, "\tStatus: {}", self.status)?;
        writeln!(f, "\tMeeting Information:")?;
        for meeting in &self.meetings {
            writeln!(f, "\t\t{meeting}")?;
        }
        if self.meetings.is_empty() {
            writeln!(f, "\t\tTBA")?;
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    /// Occurs when a meeting-time pattern can't be parsed. The offending
    /// text is kept for diagnostics.
    #[error("malformed meeting time '{text}': {reason}")]
    MalformedMeeting { text: String, reason: &'static str },

    /// Occurs when a requested group key isn't present in the catalog.
    #[error("unknown group key: {0}")]
    UnknownGroup(String),

    /// Occurs when two sections in the same catalog carry the same ID.
    /// Catalog construction aborts; no partial catalog is exposed.
    #[error("duplicate section ID: {0}")]
    DuplicateSectionId(SectionId),

    /// Occurs when the given input is not valid.
    #[error("invalid input for '{0}' provided: {1}")]
    InvalidArguments(&'static str, &'static str),

    /// Occurs when there was an error with serde while reading catalog
    /// records from JSON.
    #[error("serde error occurred: {0}")]
    SerdeError(#[from] serde_json::Error),
}
