//! Error type for terminal and file operations.
//!
//! Editing itself never fails: unbound keys are ignored and bad commands
//! become an on-screen message. Only the edges of the program return
//! errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the terminal session, input thread, or file loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file to edit could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Reading terminal input failed.
    #[error("terminal input failed: {0}")]
    Input(String),

    /// The input thread stopped delivering events.
    #[error("input channel closed")]
    InputClosed,
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
