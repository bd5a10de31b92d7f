//! # Tern
//!
//! A modal terminal text editor core.
//!
//! Tern keeps a document as a chain of byte lines, interprets keys according
//! to a vi-like mode (Normal, Insert, Command), and renders the editor into
//! a cell grid that is flushed to the terminal as one batch of escape
//! sequences per frame.
//!
//! ## Core Concepts
//!
//! - **Document**: arena of lines linked by stable [`LineId`] handles
//! - **Pane**: cursor and viewport over the document
//! - **Modes**: one key handler per [`Mode`], driven by [`Editor::handle_key`]
//! - **Framebuffer**: cells plus cursor, encoded by [`buffer::flush`]
//!
//! ## Example
//!
//! ```rust
//! use tern::{Editor, Framebuffer, KeyEvent, OutputBuffer, Rect};
//!
//! let mut editor = Editor::new(b"hello\nworld");
//! for key in KeyEvent::decode(b"jA!") {
//!     editor.handle_key(key);
//! }
//! assert_eq!(editor.document().to_bytes(), b"hello\nworld!");
//!
//! let mut fb = Framebuffer::new(40, 10, editor.theme().text);
//! editor.render(&mut fb, Rect::from_size(40, 10));
//!
//! let mut out = OutputBuffer::new();
//! tern::buffer::flush::encode_frame(&fb, &mut out);
//! assert!(!out.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod document;
pub mod editor;
pub mod error;
pub mod layout;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Cell, CursorShape, Framebuffer, Rgb, Style};
pub use document::{Document, Line, LineId};
pub use editor::{Editor, EditorConfig, KeyEvent, Mode, Outcome, Theme};
pub use error::{Error, Result};
pub use layout::Rect;
pub use terminal::OutputBuffer;
