//! Terminal output for the status panel.
//!
//! The panel is plain text: every frame clears the screen, homes the cursor
//! and writes the whole panel again. There is no raw mode and no alternate
//! screen, so nothing needs restoring when the process is interrupted.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Writes full-screen frames to a terminal (or any writer).
pub struct Canvas<W: Write> {
    writer: W,
}

impl<W: Write> Canvas<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Clear the screen, move to the top-left corner and write `frame`.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        queue!(
            self.writer,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(frame)
        )?;
        self.writer.flush()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
