use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::conflict::conflicts;
use crate::types::{MeetingTime, Section};

/// A cooperative cancellation flag for a running search. Cloning the
/// token shares the flag, so one side can trip it while the search holds
/// the other clone; the search then returns the schedules it has
/// accumulated so far, without error.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a new, untripped token.
    pub fn new() -> Self {
        CancelToken::default()
    }

    /// Trips the token. Every clone observes the trip.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Enumerates every assignment of one section per group such that the
/// union of all chosen meetings is pairwise conflict-free. Groups are
/// tried in the order given; within a group, sections are tried in
/// roster order, so emission order is a deterministic function of the
/// input.
///
/// This is an iterative depth-first backtracking search. `cursor` keeps
/// the next candidate to try per level so that a retract resumes right
/// after the section previously placed there, and `placed` remembers how
/// many meetings each placement contributed to the running pool so a
/// retract can pop exactly those.
///
/// # Parameters
/// - `groups`: One non-empty candidate list per choice slot. Any empty
///   list short-circuits to no results; an empty `groups` yields one
///   empty assignment.
/// - `cancel`: An optional cancel flag, consulted between steps.
///
/// # Returns
/// All conflict-free assignments, aligned with the order of `groups`.
pub(crate) fn enumerate<'a>(
    groups: &[Vec<&'a Section>],
    cancel: Option<&CancelToken>,
) -> Vec<Vec<&'a Section>> {
    let level_count = groups.len();
    if groups.iter().any(|group| group.is_empty()) {
        return Vec::new();
    }

    let mut results: Vec<Vec<&Section>> = Vec::new();
    let mut chosen: Vec<usize> = Vec::with_capacity(level_count);
    let mut placed: Vec<usize> = Vec::with_capacity(level_count);
    let mut pool: Vec<MeetingTime> = Vec::new();
    let mut cursor: Vec<usize> = vec![0; level_count];
    let mut level: usize = 0;
    let mut choice: usize = 0;

    loop {
        if level == level_count {
            results.push(
                chosen
                    .iter()
                    .enumerate()
                    .map(|(at, &pick)| groups[at][pick])
                    .collect(),
            );

            // Keep searching within the last group.
            if level_count == 0 {
                break;
            }
            level -= 1;
            let count = placed.pop().unwrap_or(0);
            pool.truncate(pool.len() - count);
            chosen.pop();
            choice = cursor[level];
            continue;
        }

        if cancel.is_some_and(CancelToken::is_cancelled) {
            break;
        }

        if choice >= groups[level].len() {
            // This level is exhausted: retract one level, resume after
            // the section previously placed there, and forget the search
            // memory of everything deeper.
            for forward in cursor[level..].iter_mut() {
                *forward = 0;
            }
            if level == 0 {
                break;
            }
            level -= 1;
            let count = placed.pop().unwrap_or(0);
            pool.truncate(pool.len() - count);
            chosen.pop();
            choice = cursor[level];
            continue;
        }

        let section = groups[level][choice];
        if section_blocked(&pool, section) {
            choice += 1;
            continue;
        }

        pool.extend(section.meetings.iter().copied());
        placed.push(section.meetings.len());
        chosen.push(choice);
        cursor[level] = choice + 1;
        level += 1;
        choice = 0;
    }

    results
}

/// Whether a section cannot join the running partial schedule. A section
/// without any listed meeting is treated like one with a single TBA
/// meeting and is never placeable.
fn section_blocked(pool: &[MeetingTime], section: &Section) -> bool {
    if section.meetings.is_empty() {
        return true;
    }

    section
        .meetings
        .iter()
        .any(|meeting| conflicts(pool, meeting))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SectionStatus, SectionType, Weekdays};

    fn lecture(section_id: i64) -> Section {
        Section {
            section_id,
            subject_code: "CS".to_string(),
            course_code: "2110".to_string(),
            section_code: "001".to_string(),
            section_type: SectionType::Lecture,
            all_instructors: vec![],
            status: SectionStatus::Open,
            meetings: vec![MeetingTime::Scheduled {
                days: Weekdays::Monday,
                start: 600,
                end: 650,
            }],
        }
    }

    #[test]
    fn zero_groups_emit_one_empty_assignment() {
        let groups: Vec<Vec<&Section>> = vec![];
        let results = enumerate(&groups, None);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_empty());
    }

    #[test]
    fn any_empty_group_short_circuits() {
        let section = lecture(1);
        let groups: Vec<Vec<&Section>> = vec![vec![&section], vec![]];
        assert!(enumerate(&groups, None).is_empty());
    }
}
