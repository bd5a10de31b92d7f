//! Actor Model: the input thread feeding the editor's main loop.
//!
//! ```text
//! ┌──────────────┐   TermEvent (bounded 1)   ┌──────────────┐
//! │ Input Thread │ ────────────────────────▶ │  Main Loop   │
//! └──────────────┘                           └──────────────┘
//! ```
//!
//! The channel holds at most one event, so the input thread stays at most
//! one key ahead of the editor.

mod input;
mod messages;

pub use input::InputActor;
pub use messages::TermEvent;
