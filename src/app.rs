//! The menu loop: owns the roster and dispatches menu choices.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::config::AppConfig;
use crate::console::{Console, MenuChoice, Reporter};
use crate::core::Student;
use crate::error::Result;
use crate::storage::EnrollmentStore;

pub struct App<R, W> {
    store: EnrollmentStore,
    console: Console<R, W>,
    students: Vec<Student>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: &AppConfig, console: Console<R, W>) -> Self {
        Self {
            store: EnrollmentStore::new(&config.data_file),
            console,
            students: Vec::new(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Load the stored roster. A missing or broken file leaves the roster
    /// as it was.
    pub fn load(&mut self) -> Result<()> {
        let students = std::mem::take(&mut self.students);
        self.students = self.store.load_into(students, &mut self.console)?;
        Ok(())
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::Register => self.console.read_student(&mut self.students)?,
            MenuChoice::ShowRoster => self.console.show_roster(&self.students)?,
            MenuChoice::Save => self.store.save(&self.students, &mut self.console)?,
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Show the menu, read one valid choice and act on it.
    pub fn step(&mut self) -> Result<ControlFlow<()>> {
        self.console.show_menu()?;
        let choice = self.console.read_menu_choice()?;
        tracing::debug!(?choice, "Menu choice accepted");
        self.dispatch(choice)
    }

    /// Load the roster, then run the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.load()?;

        loop {
            match self.step() {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(err) if err.is_end_of_input() => {
                    tracing::debug!("Input closed, leaving menu loop");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        self.console.notice("Program Ended")
    }
}
