//! Framebuffer: A grid of cells representing one rendered frame.
//!
//! The framebuffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order. Every writer clips its area
//! against the framebuffer bounds first, so no out-of-bounds index is
//! ever formed.

use super::cell::{Cell, CursorShape, Rgb, Style};
use crate::layout::Rect;

/// Number of columns a tab byte occupies.
pub const TAB_WIDTH: i32 = 4;

/// Number of columns of the `<xx>` placeholder for a non-printable byte.
pub const PLACEHOLDER_WIDTH: i32 = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Whether `byte` is printable ASCII (space through `~`).
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    byte >= 0x20 && byte < 0x7f
}

/// Number of screen columns a single byte occupies when drawn.
#[inline]
pub const fn byte_width(byte: u8) -> i32 {
    if byte == b'\t' {
        TAB_WIDTH
    } else if is_printable(byte) {
        1
    } else {
        PLACEHOLDER_WIDTH
    }
}

/// Number of screen columns `text` occupies when drawn.
///
/// This is the same width function [`Framebuffer::put_str`] uses, so a
/// byte index can be mapped to a screen column with
/// `display_width(&line[..col])`.
pub fn display_width(text: &[u8]) -> i32 {
    text.iter().map(|&b| byte_width(b)).sum()
}

/// The `<xx>` placeholder drawn for a non-printable byte.
#[inline]
pub const fn placeholder(byte: u8) -> [u8; 4] {
    [
        b'<',
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0f) as usize],
        b'>',
    ]
}

/// A grid of cells plus the cursor position and shape for the frame.
///
/// Access is in row-major order: `index = y * width + x`.
///
/// # Capacity
///
/// [`Framebuffer::reset`] reuses the cell storage. Capacity grows when the
/// terminal gets bigger and is kept when it shrinks.
#[derive(Clone)]
pub struct Framebuffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
    /// Style every cell gets on reset.
    base: Style,
    cursor_x: i32,
    cursor_y: i32,
    cursor_shape: CursorShape,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// All cells are initialized to blanks in `base` style.
    pub fn new(width: u16, height: u16, base: Style) -> Self {
        let mut fb = Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
            base,
            cursor_x: 0,
            cursor_y: 0,
            cursor_shape: CursorShape::Block,
        };
        fb.reset(width, height);
        fb
    }

    /// Resize to `width` x `height` and blank every cell.
    ///
    /// Must be called before each frame is drawn. Never shrinks capacity.
    pub fn reset(&mut self, width: u16, height: u16) {
        let size = usize::from(width) * usize::from(height);
        self.cells.clear();
        self.cells.resize(size, Cell::blank(self.base));
        self.width = width;
        self.height = height;
    }

    /// Get the framebuffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the framebuffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the framebuffer has no cells (zero-sized terminal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width).max(1))
    }

    /// The full framebuffer area.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Clip `area` to the framebuffer bounds.
    #[inline]
    pub fn clip(&self, area: Rect) -> Rect {
        self.bounds().intersect(&area)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.bounds().contains(x, y) {
            // Both coordinates are non-negative here.
            Some(y as usize * usize::from(self.width) + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Paint the background of a region, blanking its characters.
    ///
    /// Foreground colors are left as they were.
    pub fn fill_background(&mut self, area: Rect, bg: Rgb) {
        let area = self.clip(area);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(idx) = self.index_of(x, y) {
                    let cell = &mut self.cells[idx];
                    cell.ch = b' ';
                    cell.style.bg = bg;
                }
            }
        }
    }

    /// Draw a single line of bytes into the top row of `area`.
    ///
    /// Tabs expand to [`TAB_WIDTH`] blank cells. Bytes that are not
    /// printable ASCII are drawn as a `<xx>` placeholder in `nonprint`
    /// style. A tab or placeholder that does not fit in the remaining
    /// width ends the row. Returns the number of columns drawn.
    pub fn put_str(&mut self, area: Rect, text: &[u8], style: Style, nonprint: Style) -> i32 {
        let area = self.clip(area);
        if area.is_empty() {
            return 0;
        }

        let mut col = 0;
        for &byte in text {
            if col >= area.width {
                break;
            }
            let width = byte_width(byte);
            if col + width > area.width {
                break;
            }

            let x = area.x + col;
            if byte == b'\t' {
                for offset in 0..TAB_WIDTH {
                    self.set(x + offset, area.y, Cell::blank(style));
                }
            } else if is_printable(byte) {
                self.set(x, area.y, Cell::new(byte, style));
            } else {
                for (offset, ch) in (0..).zip(placeholder(byte)) {
                    self.set(x + offset, area.y, Cell::new(ch, nonprint));
                }
            }
            col += width;
        }
        col
    }

    /// Draw `text` one `\n`-separated line per row, clipped to `area`.
    pub fn put_flowed(&mut self, area: Rect, text: &[u8], style: Style, nonprint: Style) {
        let area = self.clip(area);
        if area.is_empty() {
            return;
        }

        let rows = usize::try_from(area.height).unwrap_or(0);
        for (offset, line) in (0..).zip(text.split(|&b| b == b'\n').take(rows)) {
            self.put_str(area.row(offset), line, style, nonprint);
        }
    }

    /// Get the cursor position in screen coordinates.
    #[inline]
    pub const fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    /// Set the cursor position in screen coordinates.
    #[inline]
    pub const fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Get the cursor shape.
    #[inline]
    pub const fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    /// Set the cursor shape.
    #[inline]
    pub const fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.cursor_shape = shape;
    }

    /// Read a row back as text (for tests and debugging).
    pub fn row_text(&self, y: i32) -> String {
        self.rows()
            .nth(usize::try_from(y).unwrap_or(usize::MAX))
            .map(|row| row.iter().map(|c| char::from(c.ch)).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("capacity", &self.cells.capacity())
            .field("cursor", &(self.cursor_x, self.cursor_y))
            .field("cursor_shape", &self.cursor_shape)
            .finish()
    }
}
