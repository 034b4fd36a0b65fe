use tracing::debug;

use crate::catalog::Catalog;
use crate::planner::input_types::ScheduleQuery;
use crate::types::{PlanError, Schedule, Section};
use crate::types;

pub mod input_types;

mod enumerate;
mod sample;

pub use crate::planner::enumerate::CancelToken;

/// Finds every weekly schedule that assigns one section per requested
/// group with no pairwise meeting conflict, bounded by the query's
/// `max_results`.
///
/// The search filters each group's sections up front, orders the groups
/// smallest-first to cut the branching factor near the root, enumerates
/// by backtracking, and finally samples the result stream when it
/// exceeds the requested bound. Each returned schedule lists section IDs
/// in the order the group keys were supplied.
///
/// For fixed inputs (and a fixed seed when sampling kicks in) the
/// returned list is identical across runs.
///
/// # Parameters
/// - `catalog`: The semester catalog.
/// - `query`: The search request.
///
/// # Returns
/// The schedules, or an error when a group key is unknown or the query
/// is invalid. Finding no schedule is not an error; the list is empty.
pub fn find_schedules(catalog: &Catalog, query: &ScheduleQuery) -> types::Result<Vec<Schedule>> {
    if query.group_keys.is_empty() {
        return Err(PlanError::InvalidArguments(
            "group_keys",
            "at least one group key is required",
        ));
    }

    let groups = query
        .group_keys
        .iter()
        .map(|key| {
            catalog
                .group(key)
                .ok_or_else(|| PlanError::UnknownGroup(key.clone()))
        })
        .collect::<types::Result<Vec<_>>>()?;

    let mut filtered: Vec<Vec<&Section>> = groups
        .iter()
        .map(|group| {
            group
                .iter()
                .filter(|section| query.filters.admits(section))
                .collect()
        })
        .collect();

    // Fewest choices first; ties keep the caller's order. The permutation
    // is remembered so emitted schedules can be mapped back.
    let group_count = filtered.len();
    let mut order: Vec<usize> = (0..group_count).collect();
    order.sort_by_key(|&at| filtered[at].len());
    let search_groups: Vec<Vec<&Section>> = order
        .iter()
        .map(|&at| std::mem::take(&mut filtered[at]))
        .collect();
    debug!(
        groups = group_count,
        candidates = search_groups.iter().map(Vec::len).sum::<usize>(),
        "starting schedule enumeration"
    );

    let assignments = enumerate::enumerate(&search_groups, query.cancel.as_ref());
    debug!(schedules = assignments.len(), "enumeration finished");

    let schedules: Vec<Schedule> = assignments
        .into_iter()
        .map(|assignment| {
            let mut ids: Schedule = vec![0; group_count];
            for (at, section) in assignment.iter().enumerate() {
                ids[order[at]] = section.section_id;
            }
            ids
        })
        .collect();

    Ok(sample::sample(schedules, query.max_results, query.seed))
}
