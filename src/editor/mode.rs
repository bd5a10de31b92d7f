//! Editor modes

use crate::buffer::CursorShape;

/// Editor mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation and single-key commands.
    #[default]
    Normal,
    /// Text entry.
    Insert,
    /// Command-line entry.
    Command,
}

impl Mode {
    /// Upper-case mode name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Status line badge text.
    pub const fn badge(self) -> &'static [u8] {
        match self {
            Self::Normal => b" NORMAL ",
            Self::Insert => b" INSERT ",
            Self::Command => b" COMMAND ",
        }
    }

    /// Cursor shape shown in this mode.
    pub const fn cursor_shape(self) -> CursorShape {
        match self {
            Self::Normal => CursorShape::Block,
            Self::Insert | Self::Command => CursorShape::Bar,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
