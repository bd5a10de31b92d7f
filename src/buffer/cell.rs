//! Cell: The atomic unit of terminal display.
//!
//! A cell is one byte of ASCII plus a foreground/background color pair.
//! Display is byte-oriented: anything that is not printable ASCII is
//! expanded into several cells by the string writer before it gets here.

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Foreground/background color pair.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Debug)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
}

impl Style {
    /// Create a style from two 24-bit hex colors.
    #[inline]
    pub const fn hex(fg: u32, bg: u32) -> Self {
        Self {
            fg: Rgb::from_u32(fg),
            bg: Rgb::from_u32(bg),
        }
    }
}

/// Shape of the terminal cursor.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Debug)]
pub enum CursorShape {
    /// Steady block (Normal mode).
    #[default]
    Block,
    /// Steady bar (Insert and Command modes).
    Bar,
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The byte to display. Always printable ASCII or a space.
    pub ch: u8,
    /// Colors of the cell.
    pub style: Style,
}

impl Cell {
    /// Create a cell from a byte and style.
    #[inline]
    pub const fn new(ch: u8, style: Style) -> Self {
        Self { ch, style }
    }

    /// A blank cell (space) in the given style.
    #[inline]
    pub const fn blank(style: Style) -> Self {
        Self::new(b' ', style)
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.style.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.style.bg
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &char::from(self.ch))
            .field("fg", &self.style.fg)
            .field("bg", &self.style.bg)
            .finish()
    }
}
