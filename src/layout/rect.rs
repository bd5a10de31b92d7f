//! Rect: A rectangle primitive for layout and clipping.
//!
//! Coordinates are signed so that layout arithmetic (e.g. subtracting a
//! reserved row from a one-row terminal) can go negative without wrapping.
//! Every writer clips against the framebuffer before touching cells.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: i32,
    /// Y coordinate (row) of the top-left corner.
    pub y: i32,
    /// Width in columns. May be zero or negative.
    pub width: i32,
    /// Height in rows. May be zero or negative.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// The canonical empty rectangle returned for disjoint intersections.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    ///
    /// Only a rectangle degenerate on *both* axes counts as empty: a
    /// zero-width rect with positive height is not empty here. Writers
    /// still never touch cells for it because their loops run over the
    /// zero-sized axis.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 && self.height <= 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the overlapping region of two rectangles.
    ///
    /// Returns [`Rect::EMPTY`] if they do not overlap on either axis.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.x >= other.right()
            || self.right() <= other.x
            || self.y >= other.bottom()
            || self.bottom() <= other.y
        {
            return Self::EMPTY;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Self::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.bottom().min(other.bottom()) - y,
        )
    }

    /// Split horizontally at a given column offset.
    ///
    /// The left part is at most `at` columns wide; the right part gets the rest.
    pub fn split_horizontal(&self, at: i32) -> (Self, Self) {
        let at = at.clamp(0, self.width.max(0));
        (
            Self::new(self.x, self.y, at, self.height),
            Self::new(self.x + at, self.y, self.width - at, self.height),
        )
    }

    /// Get a single row of this rectangle at `offset` rows from the top.
    #[inline]
    pub const fn row(&self, offset: i32) -> Self {
        Self::new(self.x, self.y + offset, self.width, 1)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
