#[cfg(test)]
mod catalog_tests {
    use classplan::catalog::Catalog;
    use classplan::parser::parse_meeting;
    use classplan::records::SectionRecord;
    use classplan::types::{PlanError, Section, SectionStatus, SectionType};

    fn record(section_id: i64, section_type: &str, meetings: &[&str]) -> SectionRecord {
        SectionRecord {
            section_id,
            subject_code: "CS".to_string(),
            course_code: "2110".to_string(),
            section_code: "001".to_string(),
            section_type: section_type.to_string(),
            instructors: vec![],
            status: SectionStatus::Open,
            meetings: meetings.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    pub fn test_catalog_from_json_fixture() {
        let catalog = Catalog::from_json(include_str!("json/catalog.json")).unwrap();

        // The MATH 3354 record carries a 14:00PM meeting and is dropped,
        // so its group never materializes.
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.section_count(), 5);
        assert!(catalog.group("math3354lecture").is_none());

        let lectures = catalog.group("cs2110lecture").unwrap();
        assert_eq!(lectures.len(), 2);
        assert_eq!(lectures[0].section_id, 1001);
        assert_eq!(lectures[1].section_id, 1002);
        assert_eq!(lectures[0].all_instructors, vec!["Nada Basit".to_string()]);

        let labs = catalog.group("cs2110laboratory").unwrap();
        assert_eq!(labs.len(), 2);
        assert_eq!(labs[1].status, SectionStatus::WaitList);

        let mut keys = catalog.group_keys().collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["cs2110laboratory", "cs2110lecture", "sts1500discussion"]
        );
    }

    #[test]
    pub fn test_group_key_composition() {
        let catalog = Catalog::from_records([record(7, "Independent Study", &["TBA"])]).unwrap();
        let group = catalog.group("cs2110independent study").unwrap();
        assert_eq!(group[0].section_type, SectionType::IndependentStudy);
    }

    #[test]
    pub fn test_unknown_section_type_is_dropped() {
        let records = [
            record(1, "Lecture", &["Mo 10:00AM-10:50AM"]),
            record(2, "Lab", &["Tu 10:00AM-10:50AM"]),
        ];
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.section_count(), 1);
    }

    #[test]
    pub fn test_duplicate_section_id_aborts() {
        let records = [
            record(1, "Lecture", &["Mo 10:00AM-10:50AM"]),
            record(1, "Laboratory", &["Tu 10:00AM-10:50AM"]),
        ];
        let result = Catalog::from_records(records);
        assert!(matches!(result, Err(PlanError::DuplicateSectionId(1))));
    }

    #[test]
    pub fn test_dropped_record_does_not_count_toward_duplicates() {
        let records = [
            record(1, "Lecture", &["not a meeting"]),
            record(1, "Lecture", &["Mo 10:00AM-10:50AM"]),
        ];
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.section_count(), 1);
    }

    #[test]
    pub fn test_catalog_from_sections() {
        let section = Section {
            section_id: 42,
            subject_code: "MATH".to_string(),
            course_code: "2310".to_string(),
            section_code: "001".to_string(),
            section_type: SectionType::Lecture,
            all_instructors: vec!["Jim Rolf".to_string()],
            status: SectionStatus::Open,
            meetings: vec![parse_meeting("TuTh 12:30PM-1:45PM").unwrap()],
        };

        let catalog = Catalog::from_sections([section]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.group("math2310lecture").unwrap()[0].section_id, 42);
    }

    #[test]
    pub fn test_bad_json_surfaces_serde_error() {
        let result = Catalog::from_json("{not json");
        assert!(matches!(result, Err(PlanError::SerdeError(_))));
    }
}
