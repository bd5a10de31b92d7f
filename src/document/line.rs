//! Line: one line of a document.

use super::LineId;

/// One line of a [`Document`](super::Document).
///
/// The line owns its bytes. Neighbor links are arena handles managed by
/// the document; only the text is mutable from outside. A line never
/// contains a `\n` byte.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: Vec<u8>,
    pub(super) prev: Option<LineId>,
    pub(super) next: Option<LineId>,
}

impl Line {
    pub(super) fn with_text(text: Vec<u8>) -> Self {
        debug_assert!(!text.contains(&b'\n'));
        Self {
            text,
            prev: None,
            next: None,
        }
    }

    /// The line's bytes.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the line has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Handle of the previous line, if any.
    #[inline]
    pub const fn prev(&self) -> Option<LineId> {
        self.prev
    }

    /// Handle of the next line, if any.
    #[inline]
    pub const fn next(&self) -> Option<LineId> {
        self.next
    }

    /// Insert `byte` at index `at`, shifting the rest right.
    ///
    /// Returns `false` (and does nothing) if `at > len` or `byte` is a
    /// newline.
    pub fn insert(&mut self, at: usize, byte: u8) -> bool {
        if at > self.text.len() || byte == b'\n' {
            return false;
        }
        self.text.insert(at, byte);
        true
    }

    /// Remove the byte at index `at`, shifting the rest left.
    ///
    /// Returns `None` if `at` is past the last byte.
    pub fn remove(&mut self, at: usize) -> Option<u8> {
        if at < self.text.len() {
            Some(self.text.remove(at))
        } else {
            None
        }
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Line")
            .field("text", &String::from_utf8_lossy(&self.text))
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut line = Line::with_text(b"ac".to_vec());
        assert!(line.insert(1, b'b'));
        assert_eq!(line.text(), b"abc");
        assert!(line.insert(3, b'd'));
        assert_eq!(line.text(), b"abcd");
        assert_eq!(line.remove(0), Some(b'a'));
        assert_eq!(line.text(), b"bcd");
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut line = Line::with_text(b"ab".to_vec());
        assert!(!line.insert(3, b'x'));
        assert_eq!(line.remove(2), None);
        assert_eq!(line.text(), b"ab");
    }

    #[test]
    fn test_newline_is_rejected() {
        let mut line = Line::default();
        assert!(!line.insert(0, b'\n'));
        assert!(line.is_empty());
    }
}
