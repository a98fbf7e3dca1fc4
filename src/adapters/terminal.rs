use crate::core::DisplaySink;
use std::io::Write;

/// Two-line screen for a terminal: expression line on top, buffer below.
///
/// Writes are collected and only reach the writer on [`TerminalDisplay::present`],
/// so one key press that updates both lines prints a single frame.
pub struct TerminalDisplay<W: Write> {
    writer: W,
    buffer: String,
    expression: String,
    dirty: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: String::new(),
            expression: String::new(),
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Prints the current frame if anything changed since the last one.
    pub fn present(&mut self) -> std::io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let width = self.width();
        writeln!(self.writer, "{}", self.expression)?;
        writeln!(self.writer, "{:>width$}", self.buffer, width = width)?;
        self.writer.flush()?;
        self.dirty = false;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn width(&self) -> usize {
        self.expression
            .chars()
            .count()
            .max(self.buffer.chars().count())
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.dirty = true;
    }

    fn show_expression(&mut self, text: &str) {
        self.expression = text.to_string();
        self.dirty = true;
    }
}
