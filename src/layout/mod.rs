//! Layout module: Rect arithmetic and per-frame regions.
//!
//! Layouts are computed once per frame from the terminal size.
//! There is no tree traversal at render time, just a few fixed rects.

mod frame;
mod rect;

pub use frame::{FrameLayout, PaneLayout, GUTTER_WIDTH};
pub use rect::Rect;
