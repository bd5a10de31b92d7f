//! Pane: a cursor and viewport over a document.
//!
//! All motions keep the cursor valid: the cursor line is in the document
//! and `cursor_col <= len(cursor_line)`. Normal-mode motions additionally
//! keep the column on an existing byte when the line is non-empty.

use crate::document::{Document, Line, LineId};

use super::EditorConfig;

/// How far right the cursor may move on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnLimit {
    /// Onto the last byte (Normal mode).
    LastByte,
    /// One past the last byte (Insert mode).
    PastEnd,
}

impl ColumnLimit {
    /// Largest allowed column on a line of `len` bytes.
    #[inline]
    pub const fn max_col(self, len: usize) -> usize {
        match self {
            Self::LastByte => len.saturating_sub(1),
            Self::PastEnd => len,
        }
    }
}

/// A view onto one document.
#[derive(Clone, Debug)]
pub struct Pane {
    cursor_line: LineId,
    cursor_line_no: usize,
    cursor_col: usize,
    viewport_top: LineId,
    viewport_top_no: usize,
    show_line_numbers: bool,
    name: String,
}

impl Pane {
    /// Create a pane with the cursor at the start of `document`.
    pub fn new(document: &Document, config: &EditorConfig) -> Self {
        let head = document.head();
        Self {
            cursor_line: head,
            cursor_line_no: 1,
            cursor_col: 0,
            viewport_top: head,
            viewport_top_no: 1,
            show_line_numbers: config.show_line_numbers,
            name: config.pane_name.clone(),
        }
    }

    /// Line the cursor is on.
    #[inline]
    pub const fn cursor_line(&self) -> LineId {
        self.cursor_line
    }

    /// 1-based number of the cursor line.
    #[inline]
    pub const fn cursor_line_no(&self) -> usize {
        self.cursor_line_no
    }

    /// Byte column of the cursor.
    #[inline]
    pub const fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// First visible line.
    #[inline]
    pub const fn viewport_top(&self) -> LineId {
        self.viewport_top
    }

    /// 1-based number of the first visible line.
    #[inline]
    pub const fn viewport_top_no(&self) -> usize {
        self.viewport_top_no
    }

    /// Whether the gutter is drawn.
    #[inline]
    pub const fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    /// Name shown in the status line.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line under the cursor.
    #[inline]
    pub fn current_line<'a>(&self, document: &'a Document) -> &'a Line {
        document.line(self.cursor_line)
    }

    /// Whether the cursor satisfies the pane invariants against `document`.
    pub fn is_valid(&self, document: &Document) -> bool {
        document.iter().zip(1..).any(|((id, line), number)| {
            id == self.cursor_line
                && number == self.cursor_line_no
                && self.cursor_col <= line.len()
        })
    }

    fn clamp_col(&mut self, document: &Document, limit: ColumnLimit) {
        let max = limit.max_col(self.current_line(document).len());
        self.cursor_col = self.cursor_col.min(max);
    }

    /// Move to the previous line, clamping the column to its last byte.
    ///
    /// Returns `false` on the first line.
    pub fn line_up(&mut self, document: &Document) -> bool {
        let Some(prev) = document.prev(self.cursor_line) else {
            return false;
        };
        self.cursor_line = prev;
        self.cursor_line_no -= 1;
        self.clamp_col(document, ColumnLimit::LastByte);
        true
    }

    /// Move to the next line, clamping the column to its last byte.
    ///
    /// Returns `false` on the last line.
    pub fn line_down(&mut self, document: &Document) -> bool {
        let Some(next) = document.next(self.cursor_line) else {
            return false;
        };
        self.cursor_line = next;
        self.cursor_line_no += 1;
        self.clamp_col(document, ColumnLimit::LastByte);
        true
    }

    /// Move down to the last line of the document.
    pub fn last_line(&mut self, document: &Document) {
        while self.line_down(document) {}
    }

    /// Move to column 0.
    #[inline]
    pub fn line_start(&mut self) {
        self.cursor_col = 0;
    }

    /// Move to the rightmost column allowed by `limit`.
    pub fn line_end(&mut self, document: &Document, limit: ColumnLimit) {
        self.cursor_col = limit.max_col(self.current_line(document).len());
    }

    /// Move one column left, stopping at 0.
    #[inline]
    pub fn step_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    /// Move one column right, stopping at `limit`.
    pub fn step_right(&mut self, document: &Document, limit: ColumnLimit) {
        let max = limit.max_col(self.current_line(document).len());
        self.cursor_col = (self.cursor_col + 1).min(max);
    }

    /// Insert `byte` at the cursor and advance past it.
    pub fn insert_byte(&mut self, document: &mut Document, byte: u8) -> bool {
        let inserted = document
            .line_mut(self.cursor_line)
            .insert(self.cursor_col, byte);
        if inserted {
            self.cursor_col += 1;
        }
        inserted
    }

    /// Delete the byte under the cursor. The cursor does not move.
    pub fn delete_under(&mut self, document: &mut Document) -> bool {
        document
            .line_mut(self.cursor_line)
            .remove(self.cursor_col)
            .is_some()
    }

    /// Delete the byte under the cursor in Normal mode, then pull the
    /// cursor back onto the line if it fell off the end.
    pub fn delete_under_normal(&mut self, document: &mut Document) -> bool {
        let deleted = self.delete_under(document);
        self.clamp_col(document, ColumnLimit::LastByte);
        deleted
    }

    /// Delete the byte before the cursor and step back onto its column.
    ///
    /// Does nothing at column 0; lines are never joined.
    pub fn backspace(&mut self, document: &mut Document) -> bool {
        if self.cursor_col == 0 {
            return false;
        }
        self.cursor_col -= 1;
        self.delete_under(document)
    }

    /// Open a new empty line below the cursor line and move onto it.
    pub fn open_line(&mut self, document: &mut Document) -> LineId {
        let id = document.insert_after(self.cursor_line);
        // Lines below the cursor shift down by one, the viewport top included.
        if self.viewport_top_no > self.cursor_line_no {
            self.viewport_top_no += 1;
        }
        self.cursor_line = id;
        self.cursor_line_no += 1;
        self.cursor_col = 0;
        id
    }

    /// Scroll so the cursor line is among the `rows` visible lines.
    ///
    /// The viewport moves by the least amount needed.
    pub fn scroll_to_cursor(&mut self, document: &Document, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.cursor_line_no < self.viewport_top_no {
            self.viewport_top = self.cursor_line;
            self.viewport_top_no = self.cursor_line_no;
        } else if self.cursor_line_no >= self.viewport_top_no + rows {
            let mut top = self.cursor_line;
            for _ in 1..rows {
                match document.prev(top) {
                    Some(prev) => top = prev,
                    None => break,
                }
            }
            self.viewport_top = top;
            self.viewport_top_no = document.line_number(top);
        }
    }
}
