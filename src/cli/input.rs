//! Line-based console I/O for the interactive menu

use std::io::{BufRead, Write};

use crate::{CourseDeskError, Result};

/// Prompted line input paired with the output stream it echoes prompts to
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `label` without a newline and read one trimmed line
    ///
    /// Returns `None` once input is exhausted. Bytes that are not valid UTF-8
    /// become U+FFFD, and only ASCII control characters and spaces are
    /// trimmed from either end.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(trim_field(&line).to_string()))
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Strip leading and trailing characters up to and including U+0020
fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Parse a whole-number answer such as a menu choice or a course count
pub fn parse_number(input: &str) -> Result<i32> {
    trim_field(input)
        .parse::<i32>()
        .map_err(|_| CourseDeskError::InvalidNumber {
            input: input.to_string(),
        })
}
