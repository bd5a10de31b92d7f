//! Drawing an editor frame into a framebuffer.
//!
//! Order: status line, command/error row, pane (gutter and text), then
//! the cursor. Later drawing wins where regions overlap.

use crate::buffer::{display_width, Framebuffer};
use crate::document::Document;
use crate::layout::{FrameLayout, PaneLayout, Rect};

use super::pane::Pane;
use super::{Editor, Mode, Theme};

/// Text drawn in front of the command line.
pub const COMMAND_PROMPT: &[u8] = b">> ";

fn columns(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

impl Editor {
    /// Whether the bottom row is taken by the command line or an error.
    pub fn bottom_row_used(&self) -> bool {
        self.mode == Mode::Command || self.prompt.has_error()
    }

    /// Draw the whole editor into `area` of `fb`.
    ///
    /// Scrolls the pane so the cursor stays visible, which is why this
    /// takes `&mut self`.
    pub fn render(&mut self, fb: &mut Framebuffer, area: Rect) {
        let area = fb.clip(area);
        fb.set_cursor(area.x, area.y);
        fb.set_cursor_shape(self.mode.cursor_shape());
        if area.is_empty() {
            return;
        }

        let layout = FrameLayout::compute(area, self.bottom_row_used());
        self.render_status_line(fb, layout.status_line);
        if let Some(row) = layout.command_line {
            self.render_command_line(fb, row);
        }
        render_pane(&mut self.pane, &self.document, &self.theme, fb, layout.pane);

        if self.mode == Mode::Command {
            let prompt = columns(COMMAND_PROMPT.len());
            let typed = display_width(self.prompt.command_line());
            fb.set_cursor(area.x + prompt + typed, area.bottom() - 1);
        }
    }

    fn render_status_line(&self, fb: &mut Framebuffer, area: Rect) {
        let theme = &self.theme;
        fb.fill_background(area, theme.status_fill);

        let badge = self.mode.badge();
        let badge_width = fb.put_str(area, badge, theme.badge(self.mode), theme.nonprint);

        let name = self.pane.name().as_bytes();
        let name_area = Rect::new(area.x + badge_width, area.y, columns(name.len()) + 2, 1)
            .intersect(&area);
        fb.fill_background(name_area, theme.name_badge.bg);
        fb.put_str(
            Rect::new(name_area.x + 1, area.y, name_area.width - 1, 1).intersect(&area),
            name,
            theme.name_badge,
            theme.nonprint,
        );
    }

    fn render_command_line(&self, fb: &mut Framebuffer, area: Rect) {
        let theme = &self.theme;
        if self.mode == Mode::Command {
            let drawn = fb.put_str(area, COMMAND_PROMPT, theme.gutter, theme.nonprint);
            let (_, rest) = area.split_horizontal(drawn);
            fb.put_str(rest, self.prompt.command_line(), theme.text, theme.nonprint);
        } else {
            fb.put_flowed(area, self.prompt.error_message(), theme.error, theme.nonprint);
        }
    }
}

fn render_pane(pane: &mut Pane, document: &Document, theme: &Theme, fb: &mut Framebuffer, area: Rect) {
    let area = fb.clip(area);
    if area.is_empty() {
        return;
    }

    let layout = PaneLayout::split(area, pane.show_line_numbers());
    let rows = usize::try_from(layout.content.height).unwrap_or(0);
    pane.scroll_to_cursor(document, rows);

    let lines = document.iter_from(pane.viewport_top());
    for ((offset, number), (id, line)) in (0..layout.content.height)
        .zip(pane.viewport_top_no()..)
        .zip(lines)
    {
        let is_cursor_line = id == pane.cursor_line();
        if let Some(gutter) = layout.gutter {
            let label = if is_cursor_line {
                format!("{number:<3} ")
            } else {
                format!("{number:>3} ")
            };
            fb.put_flowed(gutter.row(offset), label.as_bytes(), theme.gutter, theme.nonprint);
        }

        let row = layout.content.row(offset);
        fb.put_str(row, line.text(), theme.text, theme.nonprint);

        if is_cursor_line {
            let before = line.text().get(..pane.cursor_col()).unwrap_or(line.text());
            fb.set_cursor(row.x + display_width(before), row.y);
        }
    }
}
