//! Terminal backend abstraction.
//!
//! The app talks to a [`TerminalBackend`] trait so the event loop can be
//! driven by a scripted double in tests; [`CrosstermBackend`] is the real
//! implementation.

use crate::error::TuiError;
use crate::theme::Theme;
use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use ensayar_widgets::Line;
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Raw terminal operations the app loop needs.
pub trait TerminalBackend {
    /// Enter raw mode and the alternate screen.
    fn enter(&mut self) -> Result<(), TuiError>;

    /// Leave the alternate screen and raw mode.
    fn leave(&mut self) -> Result<(), TuiError>;

    /// Terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16), TuiError>;

    /// Wait up to `timeout` for an input event.
    fn poll(&mut self, timeout: Duration) -> Result<bool, TuiError>;

    /// Read the next input event.
    fn read_event(&mut self) -> Result<CrosstermEvent, TuiError>;

    /// Replace the screen contents with the given styled lines.
    fn draw(&mut self, lines: &[Line], theme: &Theme) -> Result<(), TuiError>;
}

/// Real crossterm backend writing to stdout.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    /// Create a backend over stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<(), TuiError> {
        enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), TuiError> {
        // Best effort: restore as much as possible even if one step fails.
        let restore = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let raw = disable_raw_mode();
        restore?;
        raw?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), TuiError> {
        Ok(terminal::size()?)
    }

    fn poll(&mut self, timeout: Duration) -> Result<bool, TuiError> {
        Ok(event::poll(timeout)?)
    }

    fn read_event(&mut self) -> Result<CrosstermEvent, TuiError> {
        Ok(event::read()?)
    }

    fn draw(&mut self, lines: &[Line], theme: &Theme) -> Result<(), TuiError> {
        let (_, rows) = self.size()?;
        queue!(self.stdout, Clear(ClearType::All))?;
        for (row, line) in lines.iter().take(usize::from(rows)).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for span in &line.spans {
                if let Some(color) = theme.color(span.tone) {
                    queue!(self.stdout, SetForegroundColor(color))?;
                }
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(self.stdout, Print(span.content.as_str()))?;
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }
}
