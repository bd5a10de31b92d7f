//! Buffer module: the cell grid a frame is drawn into.
//!
//! This module contains:
//! - [`Cell`]: one byte plus a foreground/background [`Style`]
//! - [`Framebuffer`]: a grid of cells plus cursor position and shape
//! - [`Rgb`]: True-color representation
//! - [`flush`]: encoder turning a framebuffer into ANSI sequences

mod cell;
mod framebuf;
pub mod flush;

pub use cell::{Cell, CursorShape, Rgb, Style};
pub use framebuf::{
    byte_width, display_width, is_printable, placeholder, Framebuffer, PLACEHOLDER_WIDTH, TAB_WIDTH,
};
