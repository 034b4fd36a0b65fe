use crate::types::{TimeType, Weekdays};

/// The literal a roster uses for a meeting whose time has not been announced.
pub(crate) const TBA_PATTERN: &str = "TBA";

/// The canonical two-letter weekday codes, Monday first. This is both the
/// order day codes are rendered in and the lookup table the parser uses.
pub(crate) const DAY_CODES: [(&str, Weekdays); 7] = [
    ("Mo", Weekdays::Monday),
    ("Tu", Weekdays::Tuesday),
    ("We", Weekdays::Wednesday),
    ("Th", Weekdays::Thursday),
    ("Fr", Weekdays::Friday),
    ("Sa", Weekdays::Saturday),
    ("Su", Weekdays::Sunday),
];

pub(crate) const MINUTES_PER_HOUR: TimeType = 60;

/// Hour of the day at which the meridiem flips.
pub(crate) const NOON_HOUR: TimeType = 12;
