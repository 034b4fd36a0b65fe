use serde::{Deserialize, Serialize};

use crate::types::{SectionId, SectionStatus};

/// A raw catalog record for one offered section, as handed over by the
/// ingestion layer. Meeting patterns and the section type are kept in
/// their textual roster form here; [`crate::catalog::Catalog::from_records`]
/// turns records into clean [`crate::types::Section`] values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    /// The section ID, unique across all sections of the active semester.
    pub section_id: SectionId,
    /// The subject code. For example, `CS`.
    pub subject_code: String,
    /// The course code. For example, `2110`.
    pub course_code: String,
    /// The section code. For example, `001`.
    pub section_code: String,
    /// The roster name of the instruction type, e.g. `Lecture` or
    /// `Independent Study`.
    pub section_type: String,
    /// All instructors teaching this section.
    #[serde(default)]
    pub instructors: Vec<String>,
    /// The enrollment status of this section.
    pub status: SectionStatus,
    /// The textual meeting patterns, e.g. `MoWeFr 10:00AM-10:50AM` or
    /// `TBA`. An empty list is treated the same as a single `TBA` entry.
    #[serde(default)]
    pub meetings: Vec<String>,
}
