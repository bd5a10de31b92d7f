//! Frame layout: the fixed regions of one editor frame.
//!
//! Layouts are recomputed every frame from the terminal area. There is no
//! tree: a frame is a status line, an optional command/error row and the
//! pane, and the pane is an optional gutter plus content.

use super::rect::Rect;

/// Width of the line-number gutter in columns.
pub const GUTTER_WIDTH: i32 = 4;

/// Regions of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    /// Main pane area (everything above the reserved rows).
    pub pane: Rect,
    /// Status line row.
    pub status_line: Rect,
    /// Command/error row, present only when it is in use.
    pub command_line: Option<Rect>,
}

impl FrameLayout {
    /// Compute the frame regions for `area`.
    ///
    /// `bottom_row_used` is true while Command mode is active or an error
    /// message is pending; it reserves the bottom row and pushes the status
    /// line up by one.
    pub const fn compute(area: Rect, bottom_row_used: bool) -> Self {
        let reserved = if bottom_row_used { 2 } else { 1 };
        let status_line = Rect::new(area.x, area.bottom() - reserved, area.width, 1);
        let command_line = if bottom_row_used {
            Some(Rect::new(area.x, area.bottom() - 1, area.width, 1))
        } else {
            None
        };

        Self {
            pane: Rect::new(area.x, area.y, area.width, area.height - reserved),
            status_line,
            command_line,
        }
    }
}

/// Regions of a pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneLayout {
    /// Line-number gutter, present when line numbers are shown.
    pub gutter: Option<Rect>,
    /// Text content area.
    pub content: Rect,
}

impl PaneLayout {
    /// Carve the gutter from the left of `area` if `show_line_numbers`.
    pub fn split(area: Rect, show_line_numbers: bool) -> Self {
        if show_line_numbers {
            let (gutter, content) = area.split_horizontal(GUTTER_WIDTH);
            Self {
                gutter: Some(gutter),
                content,
            }
        } else {
            Self {
                gutter: None,
                content: area,
            }
        }
    }
}
