use crate::constants::{MINUTES_PER_HOUR, NOON_HOUR};
use crate::types::TimeType;

/// Renders a minute of the day in the 12-hour clock form used by meeting
/// patterns, e.g. `650` becomes `10:50AM` and `750` becomes `12:30PM`.
///
/// # Parameters
/// - `minute`: The minute of the day.
///
/// # Returns
/// The formatted time.
pub(crate) fn minutes_to_12hr(minute: TimeType) -> String {
    let hour = minute / MINUTES_PER_HOUR;
    let minute = minute % MINUTES_PER_HOUR;
    let meridiem = if hour < NOON_HOUR { "AM" } else { "PM" };
    let hour = match hour % NOON_HOUR {
        0 => NOON_HOUR,
        h => h,
    };

    format!("{hour}:{minute:02}{meridiem}")
}

/// Parses one 12-hour clock time like `10:00AM` or `1:45PM` into a minute
/// of the day. The hour must be between 1 and 12 and the minute must be
/// exactly two digits; `12:xxAM` is the midnight hour and `12:xxPM` the
/// noon hour.
///
/// # Parameters
/// - `text`: The clock time. Surrounding whitespace is ignored.
///
/// # Returns
/// The minute of the day, or `None` if the text isn't a valid clock time.
pub(crate) fn parse_clock_12hr(text: &str) -> Option<TimeType> {
    let text = text.trim();
    let (clock, is_pm) = if let Some(rest) = text.strip_suffix("AM") {
        (rest, false)
    } else if let Some(rest) = text.strip_suffix("PM") {
        (rest, true)
    } else {
        return None;
    };

    let (hour_text, minute_text) = clock.split_once(':')?;
    if hour_text.is_empty()
        || minute_text.len() != 2
        || !hour_text.bytes().all(|b| b.is_ascii_digit())
        || !minute_text.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let hour = hour_text.parse::<TimeType>().ok()?;
    let minute = minute_text.parse::<TimeType>().ok()?;
    if !(1..=NOON_HOUR).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (h, false) if h == NOON_HOUR => 0,
        (h, true) if h == NOON_HOUR => NOON_HOUR,
        (h, false) => h,
        (h, true) => h + NOON_HOUR,
    };

    Some(hour * MINUTES_PER_HOUR + minute)
}
