//! Line-based console: menu, prompts, roster display and error reporting.
//!
//! The console is generic over its input and output so whole sessions can be
//! driven from in-memory buffers.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::core::{Named, Student};
use crate::error::{RegistrationError, Result};
use crate::logging;

pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

const ROSTER_BORDER_WIDTH: usize = 50;

/// Where user-facing failures and roster listings are sent.
pub trait Reporter {
    /// Print `message`, followed by a technical detail block when `error`
    /// is present.
    fn report_error(&mut self, message: &str, error: Option<&RegistrationError>) -> Result<()>;

    /// Print every student in roster order inside a bordered block.
    fn show_roster(&mut self, students: &[Student]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ShowRoster,
    Save,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = RegistrationError;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::ShowRoster),
            "3" => Ok(Self::Save),
            "4" => Ok(Self::Exit),
            other => Err(RegistrationError::invalid_menu_choice(other)),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` and read one line, without its line terminator.
    ///
    /// A closed input stream is reported as `UnexpectedEof`. Bytes that are
    /// not valid UTF-8 become U+FFFD, which no menu option or field accepts.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed").into());
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn notice(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", MENU.bold())?;
        Ok(())
    }

    /// Prompt until the user enters one of the four menu numbers.
    pub fn read_menu_choice(&mut self) -> Result<MenuChoice> {
        loop {
            let input = self.prompt("Enter your menu choice number: ")?;
            match input.parse::<MenuChoice>() {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    logging::log_rejected_input("menu choice", &input);
                    self.report_error(&err.to_string(), None)?;
                }
            }
        }
    }

    /// Prompt for a new student and append it to `students` when every
    /// field validates. On a validation failure the roster is left as is.
    pub fn read_student(&mut self, students: &mut Vec<Student>) -> Result<()> {
        let first_name = self.prompt("Enter the student's first name: ")?;
        let last_name = self.prompt("Enter the student's last name: ")?;
        let course_name = self.prompt("Please enter the name of the course: ")?;

        match Student::new(&first_name, &last_name, &course_name) {
            Ok(student) => {
                logging::log_registration(
                    &student.first_name(),
                    &student.last_name(),
                    &student.course_name(),
                );
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "{} You have registered {} for {}.",
                    "✓".green(),
                    student.full_name(),
                    student.course_name()
                )?;
                students.push(student);
            }
            Err(err) => {
                if let RegistrationError::InvalidField { field, value, .. } = &err {
                    logging::log_rejected_input(field.label(), value);
                }
                self.report_error("One of the values was of incorrect type!", Some(&err))?;
            }
        }

        Ok(())
    }
}

impl<R: BufRead, W: Write> Reporter for Console<R, W> {
    fn report_error(&mut self, message: &str, error: Option<&RegistrationError>) -> Result<()> {
        writeln!(self.output, "{} {}\n", "✗".red().bold(), message)?;
        if let Some(err) = error {
            writeln!(self.output, "{}", "-- Technical Error Message --".yellow())?;
            writeln!(self.output, "{err}")?;
            writeln!(self.output, "{}", err.summary())?;
            writeln!(self.output, "{}", err.kind().dimmed())?;
        }
        Ok(())
    }

    fn show_roster(&mut self, students: &[Student]) -> Result<()> {
        let border = "-".repeat(ROSTER_BORDER_WIDTH);
        writeln!(self.output, "{border}")?;
        for student in students {
            writeln!(
                self.output,
                "Student {} {} is enrolled in {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )?;
        }
        writeln!(self.output, "{border}")?;
        Ok(())
    }
}
