//! Test fixtures for consistent roster data

use crate::core::Student;

/// A small valid roster with mixed-case input and a multi-word course.
pub fn sample_roster() -> Vec<Student> {
    vec![
        Student::new("jane", "doe", "math101").unwrap(),
        Student::new("JOHN", "smith", "art history").unwrap(),
        Student::new("Zoë", "Brontë", "Poetry").unwrap(),
    ]
}

/// Enrollment file body in the on-disk format with `count` entries.
pub fn enrollment_json(count: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| {
            let course = format!("Course{i}");
            format!(r#"{{"FirstName": "Student", "LastName": "Number", "CourseName": "{course}"}}"#)
        })
        .collect();
    format!("[{}]", entries.join(","))
}
