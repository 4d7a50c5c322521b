//! Mock implementations of the console seams

use crate::console::Reporter;
use crate::core::Student;
use crate::error::{RegistrationError, Result};

/// Records everything sent to it instead of printing.
///
/// Each error is kept as `(message, kind)` where `kind` is the technical
/// classification when an error was attached.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub errors: Vec<(String, Option<String>)>,
    pub rosters: Vec<Vec<Student>>,
}

impl Reporter for RecordingReporter {
    fn report_error(&mut self, message: &str, error: Option<&RegistrationError>) -> Result<()> {
        self.errors
            .push((message.to_string(), error.map(|e| e.kind().to_string())));
        Ok(())
    }

    fn show_roster(&mut self, students: &[Student]) -> Result<()> {
        self.rosters.push(students.to_vec());
        Ok(())
    }
}
