//! Terminal guard and drawing primitives.
//!
//! Raw mode and the alternate screen are entered on construction and restored
//! on drop, so a panic or early return still leaves the shell usable. Frames
//! are drawn queued and flushed once per `end_frame`.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

pub struct Term {
    stdout: Stdout,
}

impl Term {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait for terminal events, draining everything already pending.
    /// A `None` timeout blocks until the first event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Start a frame: reset attributes, hide the cursor, clear to `bg`.
    pub fn begin_frame(&mut self, bg: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            cursor::Hide,
            SetBackgroundColor(bg),
            Clear(ClearType::All)
        )
    }

    pub fn print(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(text)
        )
    }

    pub fn print_bold(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Color,
        bg: Color,
    ) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Bold),
            cursor::MoveTo(x, y),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(text),
            SetAttribute(Attribute::NormalIntensity)
        )
    }

    pub fn fill_row(&mut self, x: u16, y: u16, width: u16, bg: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetBackgroundColor(bg),
            Print(" ".repeat(width as usize))
        )
    }

    /// Flush the frame. When `cursor` is set, the terminal cursor is shown
    /// there (the edit point of the focused field).
    pub fn end_frame(&mut self, cursor: Option<(u16, u16)>) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        if let Some((x, y)) = cursor {
            queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?;
        }
        self.stdout.flush()
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
