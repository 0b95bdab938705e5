use std::io::{BufRead, Write};

use super::Flow;
use crate::cli::render::write_notifications;
use crate::cli::session::Session;
use crate::Result;

pub fn send_notification<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let Some(course_id) = session
        .console
        .prompt("Enter Course ID to send notifications: ")?
    else {
        return Ok(Flow::Exit);
    };
    let Some(message) = session.console.prompt("Enter the notification message: ")? else {
        return Ok(Flow::Exit);
    };

    session.desk.notifications.send(course_id, message);

    session.console.line("Notification sent successfully!")?;
    session.console.blank()?;
    Ok(Flow::Continue)
}

pub fn view_notifications<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Flow> {
    let Some(course_id) = session
        .console
        .prompt("Enter Course ID to view notifications: ")?
    else {
        return Ok(Flow::Exit);
    };

    let history = session.desk.notifications.history(&course_id);
    if history.is_empty() {
        session
            .console
            .line("No notifications found for this course.")?;
    } else {
        session
            .console
            .line(format!("Notifications for Course ID {course_id}:"))?;
        write_notifications(session.console.writer_mut(), session.format, history)?;
    }
    session.console.blank()?;
    Ok(Flow::Continue)
}
