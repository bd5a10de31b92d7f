//! Flush writer: encode a framebuffer as an ANSI byte stream.
//!
//! Every frame retransmits the whole grid. What is minimized is the color
//! overhead: an SGR color sequence is emitted only when a cell's color
//! differs from the previous cell's. After the grid the writer emits the
//! cursor shape and position.
//!
//! All output is accumulated in an [`OutputBuffer`] and flushed by the
//! caller with one syscall.

use super::{Framebuffer, Rgb};
use crate::terminal::OutputBuffer;

/// Statistics about one encoded frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Number of cells written.
    pub cells: usize,
    /// Number of foreground color sequences emitted.
    pub fg_changes: usize,
    /// Number of background color sequences emitted.
    pub bg_changes: usize,
    /// Total bytes appended to the output buffer.
    pub bytes: usize,
}

/// Encode `fb` into `output`.
///
/// The sequence is: hide cursor, then per row a move to the row start
/// followed by its cells (with color changes only where needed), then
/// attribute reset, cursor shape, cursor position and show cursor.
pub fn encode_frame(fb: &Framebuffer, output: &mut OutputBuffer) -> FlushStats {
    let start = output.len();
    let mut stats = FlushStats::default();

    output.cursor_hide();

    let mut last_fg: Option<Rgb> = None;
    let mut last_bg: Option<Rgb> = None;

    for (y, row) in (0..).zip(fb.rows()) {
        output.cursor_move(0, y);

        for cell in row {
            if last_fg != Some(cell.fg()) {
                output.set_fg(cell.fg());
                last_fg = Some(cell.fg());
                stats.fg_changes += 1;
            }
            if last_bg != Some(cell.bg()) {
                output.set_bg(cell.bg());
                last_bg = Some(cell.bg());
                stats.bg_changes += 1;
            }
            output.write_byte(cell.ch);
            stats.cells += 1;
        }
    }

    output.reset_attrs();
    output.cursor_shape(fb.cursor_shape());
    let (x, y) = fb.cursor();
    output.cursor_move(x, y);
    output.cursor_show();

    stats.bytes = output.len() - start;
    stats
}
