use crate::conflict::conflicts;
use crate::parser::parse_meeting;
use crate::planner::CancelToken;
use crate::types::{MeetingTime, Section, SectionStatus};
use crate::types;

/// Pre-search filters applied to each section of a requested group before
/// enumeration starts. All fields are optional; an empty filter admits
/// every section.
///
/// Prefer using [`SectionFilters::builder`] to construct this object,
/// especially when the forbidden windows come in textual form.
#[derive(Debug, Clone, Default)]
pub struct SectionFilters {
    /// Meeting windows a section must stay clear of. A section is
    /// rejected when any of its scheduled meetings collides with any
    /// window. Useful to e.g. keep mornings free with
    /// `MoTuWeThFr 12:00AM-8:00AM`.
    pub forbidden_windows: Vec<MeetingTime>,
    /// When set, a section must have exactly this status.
    pub required_status: Option<SectionStatus>,
    /// When set, a section must list an instructor with exactly this
    /// name. The comparison is case-sensitive.
    pub required_instructor: Option<String>,
}

impl SectionFilters {
    /// Creates a builder to construct this `SectionFilters` object.
    ///
    /// # Returns
    /// The builder.
    pub fn builder() -> SectionFiltersBuilder {
        SectionFiltersBuilder::new()
    }

    /// Checks whether a section survives these filters.
    ///
    /// Only scheduled meetings are tested against the forbidden windows,
    /// so a section whose time is still TBA passes here; the conflict
    /// check excludes it later during the search.
    ///
    /// # Parameters
    /// - `section`: The section to test.
    ///
    /// # Returns
    /// `true` if the section is eligible for enumeration.
    pub fn admits(&self, section: &Section) -> bool {
        if let Some(required) = self.required_status {
            if section.status != required {
                return false;
            }
        }

        if let Some(required) = &self.required_instructor {
            if !section.all_instructors.iter().any(|name| name == required) {
                return false;
            }
        }

        !section.meetings.iter().any(|meeting| {
            matches!(meeting, MeetingTime::Scheduled { .. })
                && conflicts(&self.forbidden_windows, meeting)
        })
    }
}

pub struct SectionFiltersBuilder {
    forbidden_windows: Vec<String>,
    required_status: Option<SectionStatus>,
    required_instructor: Option<String>,
}

impl SectionFiltersBuilder {
    pub fn new() -> Self {
        SectionFiltersBuilder {
            forbidden_windows: vec![],
            required_status: None,
            required_instructor: None,
        }
    }

    /// Adds a forbidden meeting window, given as a textual meeting
    /// pattern like `MoTuWeThFr 12:00AM-8:00AM`. This can be applied
    /// multiple times.
    ///
    /// # Parameters
    /// - `window`: The window pattern.
    ///
    /// # Returns
    /// The builder.
    pub fn with_forbidden_window(mut self, window: impl Into<String>) -> Self {
        self.forbidden_windows.push(window.into());
        self
    }

    /// Requires sections to have exactly this status, e.g. only `Open`
    /// sections.
    ///
    /// # Parameters
    /// - `status`: The required status.
    ///
    /// # Returns
    /// The builder.
    pub fn with_required_status(mut self, status: SectionStatus) -> Self {
        self.required_status = Some(status);
        self
    }

    /// Requires sections to list an instructor with exactly this name.
    ///
    /// # Parameters
    /// - `instructor`: The instructor name, compared case-sensitively.
    ///
    /// # Returns
    /// The builder.
    pub fn with_required_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.required_instructor = Some(instructor.into());
        self
    }

    /// Tries to build the `SectionFilters` object, parsing every
    /// forbidden window pattern.
    ///
    /// # Returns
    /// The filters, or [`crate::types::PlanError::MalformedMeeting`] for
    /// the first window pattern that fails to parse.
    pub fn try_build(self) -> types::Result<SectionFilters> {
        let forbidden_windows = self
            .forbidden_windows
            .iter()
            .map(|window| parse_meeting(window))
            .collect::<types::Result<Vec<_>>>()?;

        Ok(SectionFilters {
            forbidden_windows,
            required_status: self.required_status,
            required_instructor: self.required_instructor,
        })
    }
}

impl Default for SectionFiltersBuilder {
    fn default() -> Self {
        SectionFiltersBuilder::new()
    }
}

/// One schedule search request: which choice slots to fill, the section
/// filters, and how the result stream is bounded.
///
/// Prefer using [`ScheduleQuery::builder`] to construct this object.
#[derive(Debug, Clone, Default)]
pub struct ScheduleQuery {
    /// The group keys to fill, e.g. `cs2110lecture`. Must be non-empty;
    /// results list section IDs in this order.
    pub group_keys: Vec<String>,
    /// The maximum number of schedules to return. When the enumeration
    /// yields more, a uniform sample of exactly this many is drawn.
    /// `None` returns everything.
    pub max_results: Option<usize>,
    /// The pre-search section filters.
    pub filters: SectionFilters,
    /// The seed for the result sampler. Fixing the seed (together with
    /// fixed inputs) makes the returned list reproducible.
    pub seed: Option<u64>,
    /// An optional cooperative cancel token, consulted between search
    /// steps. When tripped, the search returns what it has accumulated.
    pub cancel: Option<CancelToken>,
}

impl ScheduleQuery {
    /// Creates a builder to construct this `ScheduleQuery` object.
    ///
    /// # Returns
    /// The builder.
    pub fn builder() -> ScheduleQueryBuilder {
        ScheduleQueryBuilder::new()
    }
}

pub struct ScheduleQueryBuilder {
    group_keys: Vec<String>,
    max_results: Option<usize>,
    filters: SectionFilters,
    seed: Option<u64>,
    cancel: Option<CancelToken>,
}

impl ScheduleQueryBuilder {
    pub fn new() -> Self {
        ScheduleQueryBuilder {
            group_keys: vec![],
            max_results: None,
            filters: SectionFilters::default(),
            seed: None,
            cancel: None,
        }
    }

    /// Adds a choice slot to fill. The key is lower-cased, so
    /// `CS2110Lecture` and `cs2110lecture` name the same group. This can
    /// be applied multiple times.
    ///
    /// # Parameters
    /// - `key`: The group key.
    ///
    /// # Returns
    /// The builder.
    pub fn with_group(mut self, key: impl Into<String>) -> Self {
        self.group_keys.push(key.into().to_lowercase());
        self
    }

    /// Sets the maximum number of schedules to return.
    ///
    /// # Parameters
    /// - `max_results`: The bound.
    ///
    /// # Returns
    /// The builder.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the pre-search section filters.
    ///
    /// # Parameters
    /// - `filters`: The filters.
    ///
    /// # Returns
    /// The builder.
    pub fn with_filters(mut self, filters: SectionFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the sampler seed.
    ///
    /// # Parameters
    /// - `seed`: The seed.
    ///
    /// # Returns
    /// The builder.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attaches a cooperative cancel token to the search.
    ///
    /// # Parameters
    /// - `cancel`: The token.
    ///
    /// # Returns
    /// The builder.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Tries to build the `ScheduleQuery` object. It is guaranteed that
    /// this will result in the `ScheduleQuery` object if at least one
    /// group key has been provided.
    ///
    /// # Returns
    /// The query, or `None` if no group key was provided.
    pub fn try_build(self) -> Option<ScheduleQuery> {
        if self.group_keys.is_empty() {
            return None;
        }

        Some(ScheduleQuery {
            group_keys: self.group_keys,
            max_results: self.max_results,
            filters: self.filters,
            seed: self.seed,
            cancel: self.cancel,
        })
    }
}

impl Default for ScheduleQueryBuilder {
    fn default() -> Self {
        ScheduleQueryBuilder::new()
    }
}
