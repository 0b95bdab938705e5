//! Rendering of course listings and notification histories

use std::io::Write;

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::catalog::Course;
use crate::config::OutputFormat;
use crate::notifications::Notification;
use crate::Result;

/// Table row for a notification history
#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Sent At")]
    sent_at: String,
}

fn rounded_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

pub fn write_courses<W: Write>(
    out: &mut W,
    format: OutputFormat,
    courses: &[&Course],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for course in courses {
                writeln!(out, "{course}")?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{}", rounded_table(courses.iter().map(|&c| c.clone())))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(courses)?)?;
        }
    }
    Ok(())
}

pub fn write_notifications<W: Write>(
    out: &mut W,
    format: OutputFormat,
    history: &[Notification],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for notification in history {
                writeln!(out, "{}", notification.message)?;
            }
        }
        OutputFormat::Table => {
            let rows = history.iter().enumerate().map(|(i, n)| NotificationRow {
                position: i + 1,
                message: n.message.clone(),
                sent_at: n.sent_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            });
            writeln!(out, "{}", rounded_table(rows))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(history)?)?;
        }
    }
    Ok(())
}
