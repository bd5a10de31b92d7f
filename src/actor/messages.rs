//! Message types sent from the input thread to the main loop.

use crate::editor::KeyEvent;

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    /// A key was pressed.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Reading from the terminal failed.
    Error(String),
}
