//! Validated person and student records
//!
//! Values are stored as entered and presented in title case. Every
//! constructor and setter validates before it stores anything, so a record
//! that exists is always valid.

use std::fmt;

use crate::core::validation::{title_case, validate_course_name, validate_name};
use crate::error::{RegistrationError, Result};

/// The fields a record carries, used to label validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    CourseName,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::CourseName => "Course name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn checked_name(field: Field, value: &str) -> Result<String> {
    validate_name(value)
        .map(|()| value.to_string())
        .map_err(|reason| RegistrationError::invalid_field(field, value, reason))
}

fn checked_course(value: &str) -> Result<String> {
    validate_course_name(value)
        .map(|()| value.to_string())
        .map_err(|reason| RegistrationError::invalid_field(Field::CourseName, value, reason))
}

/// Capabilities shared by every record that names a person.
pub trait Named {
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        Ok(Self {
            first_name: checked_name(Field::FirstName, first_name)?,
            last_name: checked_name(Field::LastName, last_name)?,
        })
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.first_name = checked_name(Field::FirstName, value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.last_name = checked_name(Field::LastName, value)?;
        Ok(())
    }
}

impl Named for Person {
    fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    fn last_name(&self) -> String {
        title_case(&self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first_name(), self.last_name())
    }
}

/// A person enrolled in a course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, course_name: &str) -> Result<Self> {
        Ok(Self {
            person: Person::new(first_name, last_name)?,
            course_name: checked_course(course_name)?,
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn course_name(&self) -> String {
        title_case(&self.course_name)
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.person.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: &str) -> Result<()> {
        self.course_name = checked_course(value)?;
        Ok(())
    }
}

impl Named for Student {
    fn first_name(&self) -> String {
        self.person.first_name()
    }

    fn last_name(&self) -> String {
        self.person.last_name()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.person, self.course_name())
    }
}
