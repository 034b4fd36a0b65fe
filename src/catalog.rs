use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::parser;
use crate::records::SectionRecord;
use crate::types::{PlanError, Section, SectionId};
use crate::types;

/// The read-only catalog of one semester: every offered section, grouped
/// by its group key (e.g. `cs2110lecture`). Built once by the ingestion
/// side and handed to searches by shared reference; a search never
/// mutates it, so independent searches may run in parallel threads
/// without coordination.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: HashMap<String, Vec<Section>>,
    section_count: usize,
}

impl Catalog {
    /// Builds a catalog from raw roster records.
    ///
    /// Records whose section type or meeting patterns fail to parse are
    /// dropped with a warning rather than failing the whole catalog; a
    /// duplicated section ID among the kept records aborts construction.
    ///
    /// # Parameters
    /// - `records`: The raw records.
    ///
    /// # Returns
    /// The catalog, or [`PlanError::DuplicateSectionId`] on an ID collision.
    pub fn from_records<I>(records: I) -> types::Result<Catalog>
    where
        I: IntoIterator<Item = SectionRecord>,
    {
        let mut catalog = Catalog::default();
        let mut seen_ids: HashSet<SectionId> = HashSet::new();
        for record in records {
            let section_id = record.section_id;
            let section = match parser::parse_section(record) {
                Ok(section) => section,
                Err(error) => {
                    warn!(section_id, %error, "dropping section from catalog");
                    continue;
                }
            };

            if !seen_ids.insert(section.section_id) {
                return Err(PlanError::DuplicateSectionId(section.section_id));
            }

            catalog.section_count += 1;
            catalog
                .groups
                .entry(section.group_key())
                .or_default()
                .push(section);
        }

        Ok(catalog)
    }

    /// Builds a catalog from sections whose meetings are already parsed.
    /// Unlike [`Catalog::from_records`], nothing is dropped here.
    ///
    /// # Parameters
    /// - `sections`: The sections.
    ///
    /// # Returns
    /// The catalog, or [`PlanError::DuplicateSectionId`] on an ID collision.
    pub fn from_sections<I>(sections: I) -> types::Result<Catalog>
    where
        I: IntoIterator<Item = Section>,
    {
        let mut catalog = Catalog::default();
        let mut seen_ids: HashSet<SectionId> = HashSet::new();
        for section in sections {
            if !seen_ids.insert(section.section_id) {
                return Err(PlanError::DuplicateSectionId(section.section_id));
            }

            catalog.section_count += 1;
            catalog
                .groups
                .entry(section.group_key())
                .or_default()
                .push(section);
        }

        Ok(catalog)
    }

    /// Builds a catalog from a JSON array of raw roster records.
    ///
    /// # Parameters
    /// - `data`: The JSON document.
    ///
    /// # Returns
    /// The catalog, or an error if the document can't be deserialized or
    /// a section ID is duplicated.
    pub fn from_json(data: &str) -> types::Result<Catalog> {
        let records: Vec<SectionRecord> = serde_json::from_str(data)?;
        Catalog::from_records(records)
    }

    /// Looks up the sections of one choice slot, in roster order.
    ///
    /// # Parameters
    /// - `key`: The group key, e.g. `cs2110lecture`.
    ///
    /// # Returns
    /// The group's sections, or `None` if the key isn't in the catalog.
    pub fn group(&self, key: &str) -> Option<&[Section]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// All group keys present in the catalog, in no particular order.
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The number of choice slots (groups) in the catalog.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog holds no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The total number of sections kept across all groups.
    pub fn section_count(&self) -> usize {
        self.section_count
    }
}
