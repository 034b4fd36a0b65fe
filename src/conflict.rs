use crate::types::MeetingTime;

/// Checks whether a candidate meeting collides with any meeting in a
/// running set.
///
/// A `Tba` candidate always counts as colliding, so sections without a
/// fixed time are never placed into a schedule. `Tba` entries inside
/// `existing` have no time to collide with and are skipped. Two scheduled
/// meetings collide when they share a weekday and their minute intervals
/// strictly overlap; touching at an endpoint (one ends at 10:50, the
/// other starts at 10:50) is not a collision.
///
/// # Parameters
/// - `existing`: The meetings already placed.
/// - `candidate`: The meeting to test.
///
/// # Returns
/// `true` if the candidate collides with any existing meeting.
pub fn conflicts(existing: &[MeetingTime], candidate: &MeetingTime) -> bool {
    let MeetingTime::Scheduled { days, start, end } = candidate else {
        return true;
    };

    existing.iter().any(|placed| match placed {
        MeetingTime::Scheduled {
            days: placed_days,
            start: placed_start,
            end: placed_end,
        } => days.intersects(*placed_days) && placed_start < end && start < placed_end,
        MeetingTime::Tba => false,
    })
}
