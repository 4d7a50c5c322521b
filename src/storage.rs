//! JSON persistence for the enrollment roster.
//!
//! The file holds an array of objects with `FirstName`, `LastName` and
//! `CourseName` keys. Entries are validated on the way in exactly like
//! user input.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::console::Reporter;
use crate::core::{Named, Student};
use crate::error::{RegistrationError, Result};
use crate::logging;
use crate::utils::atomic_file;

pub const DEFAULT_DATA_FILE: &str = "Enrollments.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EnrollmentEntry {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "CourseName")]
    course_name: String,
}

impl From<&Student> for EnrollmentEntry {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name(),
        }
    }
}

/// Reads and writes the roster at a fixed path.
#[derive(Debug, Clone)]
pub struct EnrollmentStore {
    path: PathBuf,
}

impl EnrollmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every entry in the file into a validated student.
    pub fn read(&self) -> Result<Vec<Student>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            RegistrationError::io_error("reading enrollments", Some(self.path.clone()), e)
        })?;

        let entries: Vec<EnrollmentEntry> = serde_json::from_str(&contents)
            .map_err(|e| RegistrationError::parse_error(&self.path, e))?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Student::new(&entry.first_name, &entry.last_name, &entry.course_name)
                    .map_err(|e| RegistrationError::invalid_record(&self.path, index, e))
            })
            .collect()
    }

    /// Replace the file contents with `students`.
    pub fn write(&self, students: &[Student]) -> Result<()> {
        let entries: Vec<EnrollmentEntry> = students.iter().map(EnrollmentEntry::from).collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| RegistrationError::Other(e.into()))?;

        atomic_file::write_atomic(&self.path, json.as_bytes()).map_err(|e| {
            match e.downcast::<std::io::Error>() {
                Ok(io) => {
                    RegistrationError::io_error("writing enrollments", Some(self.path.clone()), io)
                }
                Err(other) => RegistrationError::Other(other.context(format!(
                    "Failed to write enrollments to {}",
                    self.path.display()
                ))),
            }
        })
    }

    /// Append the stored students to `students` and return the result.
    ///
    /// Any failure is reported through `reporter` and `students` comes back
    /// unchanged. Only a failure of the reporter itself is returned as an
    /// error.
    pub fn load_into(
        &self,
        mut students: Vec<Student>,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<Student>> {
        match self.read() {
            Ok(loaded) => {
                logging::log_roster_loaded(&self.path, loaded.len());
                students.extend(loaded);
            }
            Err(err) => {
                logging::log_storage_failure("load", &self.path, &err);
                reporter.report_error("Error reading the file.", Some(&err))?;
            }
        }

        Ok(students)
    }

    /// Write `students` to disk and show the roster on success.
    pub fn save(&self, students: &[Student], reporter: &mut dyn Reporter) -> Result<()> {
        match self.write(students) {
            Ok(()) => {
                logging::log_roster_saved(&self.path, students.len());
                reporter.show_roster(students)
            }
            Err(err) => {
                logging::log_storage_failure("save", &self.path, &err);
                reporter.report_error(
                    "Error writing to the file. Please ensure the file is not open elsewhere.",
                    Some(&err),
                )
            }
        }
    }
}

impl Default for EnrollmentStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
