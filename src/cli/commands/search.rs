use std::io::{BufRead, Write};

use super::Flow;
use crate::catalog::Course;
use crate::cli::render::write_courses;
use crate::cli::session::Session;
use crate::Result;

pub fn search_courses<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let Some(keyword) = session
        .console
        .prompt("Enter a keyword to search (name, instructor, or type): ")?
    else {
        return Ok(Flow::Exit);
    };

    let results = session.desk.catalog.search_by_keyword(&keyword);
    if results.is_empty() {
        session.console.line("No courses match your search.")?;
    } else {
        session.console.line("Search Results:")?;
        write_courses(session.console.writer_mut(), session.format, &results)?;
    }
    session.console.blank()?;
    Ok(Flow::Continue)
}

pub fn display_all_courses<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    if session.desk.catalog.is_empty() {
        session.console.line("No courses available.")?;
    } else {
        let courses: Vec<&Course> = session.desk.catalog.list_all().iter().collect();
        session.console.line("All Available Courses:")?;
        write_courses(session.console.writer_mut(), session.format, &courses)?;
    }
    session.console.blank()?;
    Ok(Flow::Continue)
}
