//! Key events consumed by the modal state machine.
//!
//! Decoding raw terminal input into these events is the input
//! collaborator's job; the editor never sees escape sequences.

use crate::buffer::is_printable;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// A character key, possibly with Ctrl held.
    Char {
        /// The byte of the key (lower-case letter for Ctrl chords).
        byte: u8,
        /// Ctrl key held.
        ctrl: bool,
    },
    /// Backspace key.
    Backspace,
    /// Escape key.
    Escape,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Delete key.
    Delete,
}

impl KeyEvent {
    /// A plain character key.
    #[inline]
    pub const fn char(byte: u8) -> Self {
        Self::Char { byte, ctrl: false }
    }

    /// A Ctrl+character chord.
    #[inline]
    pub const fn ctrl(byte: u8) -> Self {
        Self::Char { byte, ctrl: true }
    }

    /// The byte of a plain, printable character key.
    ///
    /// Ctrl chords and non-character keys give `None`.
    #[inline]
    pub const fn printable(self) -> Option<u8> {
        match self {
            Self::Char { byte, ctrl: false } if is_printable(byte) => Some(byte),
            _ => None,
        }
    }

    /// Decode a single raw terminal byte.
    ///
    /// Carriage return is Enter, DEL is Backspace, ESC is Escape, bytes
    /// 1..=26 are Ctrl+letter. Multi-byte sequences (Home, End, Delete)
    /// cannot be decoded from one byte and give `None`.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\r' | b'\n' => Some(Self::Enter),
            b'\t' => Some(Self::Tab),
            0x7f | 0x08 => Some(Self::Backspace),
            0x1b => Some(Self::Escape),
            1..=26 => Some(Self::ctrl(b'a' - 1 + byte)),
            b if is_printable(b) => Some(Self::char(b)),
            _ => None,
        }
    }

    /// Decode a byte string with [`KeyEvent::from_byte`], skipping bytes
    /// that do not decode.
    pub fn decode(bytes: &[u8]) -> Vec<Self> {
        bytes.iter().filter_map(|&b| Self::from_byte(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(KeyEvent::from_byte(b'h'), Some(KeyEvent::char(b'h')));
        assert_eq!(KeyEvent::from_byte(b' '), Some(KeyEvent::char(b' ')));
        assert_eq!(KeyEvent::from_byte(b'\r'), Some(KeyEvent::Enter));
        assert_eq!(KeyEvent::from_byte(b'\t'), Some(KeyEvent::Tab));
        assert_eq!(KeyEvent::from_byte(0x7f), Some(KeyEvent::Backspace));
        assert_eq!(KeyEvent::from_byte(0x1b), Some(KeyEvent::Escape));
        assert_eq!(KeyEvent::from_byte(0x01), Some(KeyEvent::ctrl(b'a')));
        assert_eq!(KeyEvent::from_byte(0x1a), Some(KeyEvent::ctrl(b'z')));
        assert_eq!(KeyEvent::from_byte(0x80), None);
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyEvent::char(b'x').printable(), Some(b'x'));
        assert_eq!(KeyEvent::ctrl(b'x').printable(), None);
        assert_eq!(KeyEvent::char(0x01).printable(), None);
        assert_eq!(KeyEvent::Enter.printable(), None);
    }

    #[test]
    fn test_decode_skips_unknown() {
        assert_eq!(
            KeyEvent::decode(b"i\xffa\x1b"),
            [KeyEvent::char(b'i'), KeyEvent::char(b'a'), KeyEvent::Escape]
        );
    }
}
