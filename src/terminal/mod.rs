//! Terminal: output encoding buffer and the raw-mode session guard.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::Session;
