//! Save/load round trips through the enrollment file

use course_registration::test_utils::fixtures::sample_roster;
use course_registration::test_utils::mocks::RecordingReporter;
use course_registration::{EnrollmentStore, Named, Student};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn triples(students: &[Student]) -> Vec<(String, String, String)> {
    students
        .iter()
        .map(|s| {
            (
                s.first_name().to_lowercase(),
                s.last_name().to_lowercase(),
                s.course_name().to_lowercase(),
            )
        })
        .collect()
}

#[test]
fn test_save_then_load_reproduces_roster() {
    let temp_dir = TempDir::new().unwrap();
    let store = EnrollmentStore::new(temp_dir.path().join("Enrollments.json"));
    let mut reporter = RecordingReporter::default();

    store.save(&sample_roster(), &mut reporter).unwrap();
    let loaded = store.load_into(Vec::new(), &mut reporter).unwrap();

    assert!(reporter.errors.is_empty());
    assert_eq!(triples(&loaded), triples(&sample_roster()));
    assert_eq!(
        loaded.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["Jane,Doe,Math101", "John,Smith,Art History", "Zoë,Brontë,Poetry"]
    );
}

#[test]
fn test_case_expanding_letters_survive_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = EnrollmentStore::new(temp_dir.path().join("Enrollments.json"));
    let mut reporter = RecordingReporter::default();
    let students = vec![
        Student::new("aİ", "doe", "math").unwrap(),
        Student::new("ßa", "straße", "İstanbul 101").unwrap(),
    ];

    store.save(&students, &mut reporter).unwrap();
    let loaded = store.load_into(Vec::new(), &mut reporter).unwrap();

    assert!(reporter.errors.is_empty());
    assert_eq!(
        loaded.iter().map(ToString::to_string).collect::<Vec<_>>(),
        students.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
    assert_eq!(loaded[0].first_name(), "Aİ");
    assert_eq!(loaded[1].first_name(), "ßa");
    assert_eq!(loaded[1].last_name(), "Straße");
}

#[test]
fn test_save_replaces_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let store = EnrollmentStore::new(temp_dir.path().join("Enrollments.json"));
    let mut reporter = RecordingReporter::default();

    store.save(&sample_roster(), &mut reporter).unwrap();
    store
        .save(&[Student::new("ada", "lovelace", "math").unwrap()], &mut reporter)
        .unwrap();

    let loaded = store.load_into(Vec::new(), &mut reporter).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].to_string(), "Ada,Lovelace,Math");
}

#[test]
fn test_empty_roster_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = EnrollmentStore::new(temp_dir.path().join("Enrollments.json"));
    let mut reporter = RecordingReporter::default();

    store.save(&[], &mut reporter).unwrap();
    let loaded = store.load_into(Vec::new(), &mut reporter).unwrap();

    assert!(loaded.is_empty());
    assert!(reporter.errors.is_empty());
}

#[test]
fn test_load_nonexistent_file_keeps_collection() {
    let temp_dir = TempDir::new().unwrap();
    let store = EnrollmentStore::new(temp_dir.path().join("nope.json"));
    let mut reporter = RecordingReporter::default();

    let existing = sample_roster();
    let loaded = store.load_into(existing.clone(), &mut reporter).unwrap();

    assert_eq!(loaded, existing);
    assert_eq!(reporter.errors.len(), 1);
}

#[test]
fn test_load_malformed_file_keeps_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    fs::write(&path, "not json at all").unwrap();
    let mut reporter = RecordingReporter::default();

    let loaded = EnrollmentStore::new(&path)
        .load_into(Vec::new(), &mut reporter)
        .unwrap();

    assert!(loaded.is_empty());
    assert_eq!(reporter.errors[0].1.as_deref(), Some("ParseError"));
}

#[test]
fn test_load_file_with_invalid_entry_keeps_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    fs::write(
        &path,
        r#"[{"FirstName": "Jane", "LastName": "Doe", "CourseName": "Math!"}]"#,
    )
    .unwrap();
    let mut reporter = RecordingReporter::default();

    let loaded = EnrollmentStore::new(&path)
        .load_into(Vec::new(), &mut reporter)
        .unwrap();

    assert!(loaded.is_empty());
    assert_eq!(reporter.errors[0].1.as_deref(), Some("RecordError"));
}

prop_compose! {
    fn valid_student()(
        first in "\\p{L}{0,12}",
        last in "\\p{L}{0,12}",
        course in "[\\p{L}0-9 ]{0,20}",
    ) -> Student {
        Student::new(&first, &last, &course).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn round_trip_preserves_every_record(students in prop::collection::vec(valid_student(), 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let store = EnrollmentStore::new(temp_dir.path().join("Enrollments.json"));
        let mut reporter = RecordingReporter::default();

        store.save(&students, &mut reporter).unwrap();
        let loaded = store.load_into(Vec::new(), &mut reporter).unwrap();

        prop_assert!(reporter.errors.is_empty());
        prop_assert_eq!(triples(&loaded), triples(&students));
    }
}
