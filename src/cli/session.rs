//! The interactive menu loop

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::commands::{course, notify, search, Flow};
use super::input::{parse_number, Console};
use super::menu::MenuChoice;
use crate::config::OutputFormat;
use crate::state::CourseDesk;
use crate::Result;

/// One interactive run: the desk state plus the console it talks through
pub struct Session<R, W> {
    pub(crate) desk: CourseDesk,
    pub(crate) console: Console<R, W>,
    pub(crate) format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(desk: CourseDesk, reader: R, writer: W, format: OutputFormat) -> Self {
        Self {
            desk,
            console: Console::new(reader, writer),
            format,
        }
    }

    pub fn desk(&self) -> &CourseDesk {
        &self.desk
    }

    /// Consume the session, returning the final state and the output stream
    pub fn into_parts(self) -> (CourseDesk, W) {
        (self.desk, self.console.into_writer())
    }

    /// Print the welcome banner and serve menu choices until Exit or end of input
    ///
    /// Bad menu input is reported to the user and never ends the loop. Only
    /// I/O failures on the console are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        self.console
            .line("Welcome to the University Course Management System")?;
        self.console.blank()?;

        loop {
            self.show_menu()?;

            let Some(raw) = self.console.prompt("Enter your choice: ")? else {
                debug!("Input closed at menu");
                return Ok(());
            };

            let flow = match parse_number(&raw) {
                Ok(number) => match MenuChoice::from_number(number) {
                    Some(choice) => self.dispatch(choice)?,
                    None => {
                        debug!(number, "Unrecognized menu option");
                        self.console
                            .line("Invalid option. Please select a valid choice.")?;
                        self.console.blank()?;
                        Flow::Continue
                    }
                },
                Err(e) => {
                    debug!("{}", e);
                    self.console.line("Please enter a valid number.")?;
                    self.console.blank()?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.line("Menu:")?;
        for choice in MenuChoice::ALL {
            self.console
                .line(format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        info!(choice = choice.name(), "Menu selection");
        match choice {
            MenuChoice::AddCourse => course::add_course(self),
            MenuChoice::SearchCourses => search::search_courses(self),
            MenuChoice::DisplayAllCourses => search::display_all_courses(self),
            MenuChoice::BulkUpload => course::bulk_upload(self),
            MenuChoice::SendNotification => notify::send_notification(self),
            MenuChoice::ViewNotifications => notify::view_notifications(self),
            MenuChoice::Exit => {
                self.console.line("Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }
}
