//! Session: raw mode and alternate screen for the life of the editor.

use std::io::{self, Write};

use crossterm::{
    cursor::{self, SetCursorStyle},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Guard that puts the terminal into editing state and restores it on drop.
///
/// Entering enables raw mode and switches to the alternate screen.
/// Dropping leaves the alternate screen, restores a block cursor, shows
/// the cursor, and disables raw mode, even when unwinding from an error.
pub struct Session {
    _private: (),
}

impl Session {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses either switch. Raw mode is
    /// turned back off if the alternate screen could not be entered.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        tracing::debug!("terminal session entered");
        Ok(Self { _private: () })
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            LeaveAlternateScreen,
            SetCursorStyle::SteadyBlock,
            cursor::Show
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal session restored");
    }
}
