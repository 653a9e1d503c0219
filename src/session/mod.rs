//! Interactive menu session
//!
//! A session owns an [`AttendanceManager`] and drives it from a console: it
//! prints the menu, reads a choice, runs one operation and loops until the user
//! exits or input ends.

mod input;
mod menu;

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::manager::AttendanceManager;
use crate::models::AddOutcome;
use crate::output::{AttendanceResult, OutputMode, StudentListResult};

pub use input::{InputError, Prompter, parse_id};
pub use menu::{BANNER, MenuChoice};

/// Whether the menu loop should continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over a manager and a pair of console streams
#[derive(Debug)]
pub struct Session<R, W> {
    manager: AttendanceManager,
    prompter: Prompter<R, W>,
    mode: OutputMode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `reader` and printing to `writer`
    pub const fn new(manager: AttendanceManager, reader: R, writer: W, mode: OutputMode) -> Self {
        Self {
            manager,
            prompter: Prompter::new(reader, writer),
            mode,
        }
    }

    /// Manager state
    pub const fn manager(&self) -> &AttendanceManager {
        &self.manager
    }

    /// Tear down the session, returning the manager and the output stream
    pub fn into_parts(self) -> (AttendanceManager, W) {
        let (_, writer) = self.prompter.into_inner();
        (self.manager, writer)
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<(), InputError> {
        loop {
            writeln!(self.prompter.writer(), "{BANNER}")?;
            let Some(line) = self.prompter.ask("Enter your choice:")? else {
                debug!("end of input, leaving menu");
                self.goodbye()?;
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(reason) => {
                    debug!("{reason}");
                    writeln!(self.prompter.writer(), "Invalid choice. Please try again.")?;
                    Flow::Continue
                },
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, InputError> {
        debug!("menu choice {choice:?}");
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::AddSubject => self.add_subject(),
            MenuChoice::MarkAttendance => self.mark_attendance(),
            MenuChoice::GetAttendance => self.get_attendance(),
            MenuChoice::DisplayAll => {
                StudentListResult::from(&self.manager).render(self.mode, self.prompter.writer())?;
                Ok(Flow::Continue)
            },
            MenuChoice::Exit => {
                self.goodbye()?;
                Ok(Flow::Exit)
            },
        }
    }

    fn goodbye(&mut self) -> Result<(), InputError> {
        writeln!(self.prompter.writer(), "Exiting program. Goodbye!")?;
        Ok(())
    }

    /// Ask for a student id and a second text field; `None` means input ended
    fn ask_id_and(&mut self, second: &str) -> Result<Option<(i64, String)>, InputError> {
        let Some(id) = self.prompter.ask_id("Enter student ID:")? else {
            return Ok(None);
        };
        let Some(text) = self.prompter.ask(second)? else {
            return Ok(None);
        };
        Ok(Some((id, text)))
    }

    fn add_student(&mut self) -> Result<Flow, InputError> {
        let Some((id, name)) = self.ask_id_and("Enter student name:")? else {
            return self.end_of_input();
        };

        let out = self.prompter.writer();
        match self.manager.add_student(id, &name) {
            AddOutcome::Added => {},
            AddOutcome::Replaced => {
                warn!("student {id} replaced, previous subjects discarded");
                writeln!(out, "Student {id} already existed and was replaced.")?;
            },
            AddOutcome::Kept => {
                writeln!(out, "Student {id} already exists and was kept.")?;
                return Ok(Flow::Continue);
            },
        }
        writeln!(out, "Student added successfully.")?;
        Ok(Flow::Continue)
    }

    fn add_subject(&mut self) -> Result<Flow, InputError> {
        let Some((id, subject)) = self.ask_id_and("Enter subject name:")? else {
            return self.end_of_input();
        };

        let out = self.prompter.writer();
        match self.manager.add_subject_to_student(id, &subject) {
            None => warn!("no student with id {id}, subject {subject} not added"),
            Some(AddOutcome::Added) => {},
            Some(AddOutcome::Replaced) => {
                warn!("subject {subject} of student {id} reset to zero attendance");
                writeln!(out, "Subject {subject} already existed and was reset.")?;
            },
            Some(AddOutcome::Kept) => {
                writeln!(out, "Subject {subject} already exists and was kept.")?;
                return Ok(Flow::Continue);
            },
        }
        writeln!(out, "Subject added to student successfully.")?;
        Ok(Flow::Continue)
    }

    fn mark_attendance(&mut self) -> Result<Flow, InputError> {
        let Some((id, subject)) = self.ask_id_and("Enter subject name:")? else {
            return self.end_of_input();
        };

        if !self.manager.mark_student_attendance(id, &subject) {
            warn!("no subject {subject} for student {id}, attendance not marked");
        }
        writeln!(self.prompter.writer(), "Attendance marked successfully.")?;
        Ok(Flow::Continue)
    }

    fn get_attendance(&mut self) -> Result<Flow, InputError> {
        let Some((id, subject)) = self.ask_id_and("Enter subject name:")? else {
            return self.end_of_input();
        };

        let result = AttendanceResult {
            student_id: id,
            attendance: self.manager.student_attendance(id, &subject),
            subject,
        };
        result.render(self.mode, self.prompter.writer())?;
        Ok(Flow::Continue)
    }

    fn end_of_input(&mut self) -> Result<Flow, InputError> {
        debug!("end of input inside a prompt");
        writeln!(self.prompter.writer())?;
        self.goodbye()?;
        Ok(Flow::Exit)
    }
}
