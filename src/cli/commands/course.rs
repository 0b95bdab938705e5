use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::Flow;
use crate::cli::input::parse_number;
use crate::cli::session::Session;
use crate::Result;

/// Fields typed in for one new course
#[derive(Debug)]
struct CourseFields {
    course_id: String,
    course_name: String,
    instructor: String,
    course_type: String,
}

fn read_course_fields<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<Option<CourseFields>> {
    let console = &mut session.console;

    let Some(course_id) = console.prompt("Enter Course ID: ")? else {
        return Ok(None);
    };
    let Some(course_name) = console.prompt("Enter Course Name: ")? else {
        return Ok(None);
    };
    let Some(instructor) = console.prompt("Enter Instructor Name: ")? else {
        return Ok(None);
    };
    let Some(course_type) =
        console.prompt("Enter Course Type (Core/Elective/Humanities): ")?
    else {
        return Ok(None);
    };

    Ok(Some(CourseFields {
        course_id,
        course_name,
        instructor,
        course_type,
    }))
}

/// Prompt for the four course fields and append the course
pub fn add_course<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let Some(fields) = read_course_fields(session)? else {
        debug!("Input closed while adding a course");
        return Ok(Flow::Exit);
    };

    session.desk.catalog.add(
        fields.course_id,
        fields.course_name,
        fields.instructor,
        fields.course_type,
    );

    session.console.line("Course added successfully!")?;
    session.console.blank()?;
    Ok(Flow::Continue)
}

/// Ask for a count, then run the add interaction that many times
///
/// An unparseable count adds nothing. Zero or negative counts parse but
/// add nothing either.
pub fn bulk_upload<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let Some(raw) = session
        .console
        .prompt("Enter the number of courses to upload: ")?
    else {
        return Ok(Flow::Exit);
    };

    let count = match parse_number(&raw) {
        Ok(count) => count,
        Err(e) => {
            debug!("Bulk upload aborted: {}", e);
            session.console.line("Invalid number. Returning to menu.")?;
            session.console.blank()?;
            return Ok(Flow::Continue);
        }
    };

    info!(count, "Bulk upload started");
    for i in 1..=count {
        session
            .console
            .line(format!("Enter details for course {i}:"))?;
        if add_course(session)? == Flow::Exit {
            debug!(completed = i - 1, "Input closed during bulk upload");
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}
