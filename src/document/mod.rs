//! Document: the text of a pane as a doubly linked chain of lines.
//!
//! Lines live in an arena and refer to their neighbors by [`LineId`]
//! handles, so the chain has no ownership cycles. Handles stay valid for
//! the life of the document: lines are only ever added.
//!
//! # Invariants
//!
//! - the chain is finite and acyclic
//! - for every line `L` with `next = N`, `N.prev = L` (and vice versa)
//! - exactly one line has no `prev` (the head), exactly one has no `next`
//! - no line contains a `\n` byte
//!
//! [`Document::check_links`] verifies the first three.

mod line;

pub use line::Line;

use thiserror::Error;

/// Stable handle of a line inside one [`Document`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LineId(usize);

/// A violation of the line chain invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The head line has a `prev` link.
    #[error("head line {0:?} has a previous line")]
    HeadHasPrev(LineId),
    /// `line.next.prev` does not point back at `line`.
    #[error("line {line:?} links to {next:?}, which does not link back")]
    BrokenBackLink {
        /// Line whose `next` is inconsistent.
        line: LineId,
        /// The line it points to.
        next: LineId,
    },
    /// Walking `next` from the head never reaches a tail.
    #[error("line chain contains a cycle")]
    Cycle,
    /// Some lines are not reachable from the head.
    #[error("{reachable} of {total} lines reachable from the head")]
    Unreachable {
        /// Lines reached by walking from the head.
        reachable: usize,
        /// Lines in the arena.
        total: usize,
    },
}

/// A document: an arena of [`Line`]s linked into one chain.
#[derive(Clone, Debug)]
pub struct Document {
    lines: Vec<Line>,
    head: LineId,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_bytes(b"")
    }
}

impl Document {
    /// Build a document by splitting `text` on `\n`.
    ///
    /// A trailing `\n` does not start an extra empty line, so
    /// `"a\nb\n"` has two lines. Empty input yields a single empty line.
    pub fn from_bytes(text: &[u8]) -> Self {
        let mut segments: Vec<&[u8]> = text.split(|&b| b == b'\n').collect();
        if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        let count = segments.len();
        let lines = segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let mut line = Line::with_text(segment.to_vec());
                line.prev = i.checked_sub(1).map(LineId);
                line.next = (i + 1 < count).then_some(LineId(i + 1));
                line
            })
            .collect();

        Self {
            lines,
            head: LineId(0),
        }
    }

    /// Serialize the document, joining lines with `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, (_, line)) in self.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(line.text());
        }
        out
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: a document has at least one line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line.
    #[inline]
    pub const fn head(&self) -> LineId {
        self.head
    }

    /// The last line, found by walking from the head.
    pub fn tail(&self) -> LineId {
        let mut id = self.head;
        while let Some(next) = self.line(id).next {
            id = next;
        }
        id
    }

    /// Get a line by handle.
    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }

    /// Get a line mutably by handle.
    #[inline]
    pub fn line_mut(&mut self, id: LineId) -> &mut Line {
        &mut self.lines[id.0]
    }

    /// Handle of the line after `id`.
    #[inline]
    pub fn next(&self, id: LineId) -> Option<LineId> {
        self.line(id).next
    }

    /// Handle of the line before `id`.
    #[inline]
    pub fn prev(&self, id: LineId) -> Option<LineId> {
        self.line(id).prev
    }

    /// 1-based line number of `id`, counted by walking `prev` links.
    pub fn line_number(&self, id: LineId) -> usize {
        let mut number = 1;
        let mut cur = id;
        while let Some(prev) = self.prev(cur) {
            number += 1;
            cur = prev;
        }
        number
    }

    /// Iterate over lines from the head.
    pub fn iter(&self) -> Lines<'_> {
        self.iter_from(self.head)
    }

    /// Iterate over lines starting at `id`.
    pub fn iter_from(&self, id: LineId) -> Lines<'_> {
        Lines {
            document: self,
            next: Some(id),
        }
    }

    /// Splice a new empty line in right after `id` and return its handle.
    pub fn insert_after(&mut self, id: LineId) -> LineId {
        let new_id = LineId(self.lines.len());
        let next = self.line(id).next;

        let mut line = Line::default();
        line.prev = Some(id);
        line.next = next;
        self.lines.push(line);

        if let Some(next) = next {
            self.line_mut(next).prev = Some(new_id);
        }
        self.line_mut(id).next = Some(new_id);

        tracing::trace!(after = ?id, line = ?new_id, "line inserted");
        new_id
    }

    /// Verify the chain invariants.
    pub fn check_links(&self) -> Result<(), LinkError> {
        if self.line(self.head).prev.is_some() {
            return Err(LinkError::HeadHasPrev(self.head));
        }

        let total = self.lines.len();
        let mut reachable = 0;
        let mut cur = Some(self.head);
        while let Some(id) = cur {
            reachable += 1;
            if reachable > total {
                return Err(LinkError::Cycle);
            }
            let next = self.line(id).next;
            if let Some(next) = next {
                if self.line(next).prev != Some(id) {
                    return Err(LinkError::BrokenBackLink { line: id, next });
                }
            }
            cur = next;
        }

        if reachable != total {
            return Err(LinkError::Unreachable { reachable, total });
        }
        Ok(())
    }
}

/// Iterator over a document's lines, yielding `(LineId, &Line)`.
pub struct Lines<'a> {
    document: &'a Document,
    next: Option<LineId>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let line = self.document.line(id);
        self.next = line.next;
        Some((id, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Document) -> Vec<String> {
        doc.iter()
            .map(|(_, l)| String::from_utf8_lossy(l.text()).into_owned())
            .collect()
    }

    #[test]
    fn test_split_lines() {
        let doc = Document::from_bytes(b"a\nb\nc");
        assert_eq!(texts(&doc), ["a", "b", "c"]);
        assert_eq!(doc.len(), 3);
        doc.check_links().unwrap();
    }

    #[test]
    fn test_round_trip() {
        for text in [&b"a\nb\nc"[..], b"", b"single", b"a\n\nb", b"\n\nx"] {
            let doc = Document::from_bytes(text);
            assert_eq!(doc.to_bytes(), text);
        }
    }

    #[test]
    fn test_trailing_newline_does_not_add_line() {
        let doc = Document::from_bytes(b"a\nb\n");
        assert_eq!(texts(&doc), ["a", "b"]);

        let doc = Document::from_bytes(b"\n");
        assert_eq!(texts(&doc), [""]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let doc = Document::from_bytes(b"a\n\nb");
        assert_eq!(texts(&doc), ["a", "", "b"]);
    }

    #[test]
    fn test_empty_input_has_one_line() {
        let doc = Document::from_bytes(b"");
        assert_eq!(doc.len(), 1);
        assert!(doc.line(doc.head()).is_empty());
        assert_eq!(doc.head(), doc.tail());
        doc.check_links().unwrap();
    }

    #[test]
    fn test_insert_after_middle() {
        let mut doc = Document::from_bytes(b"a\nc");
        let new = doc.insert_after(doc.head());
        doc.line_mut(new).insert(0, b'b');
        assert_eq!(texts(&doc), ["a", "b", "c"]);
        assert_eq!(doc.line_number(new), 2);
        doc.check_links().unwrap();
    }

    #[test]
    fn test_insert_after_tail() {
        let mut doc = Document::from_bytes(b"abc");
        let tail = doc.tail();
        let new = doc.insert_after(tail);
        assert_eq!(doc.tail(), new);
        assert_eq!(doc.prev(new), Some(tail));
        assert_eq!(doc.to_bytes(), b"abc\n");
        doc.check_links().unwrap();
    }

    #[test]
    fn test_line_number_and_navigation() {
        let doc = Document::from_bytes(b"1\n2\n3\n4");
        let tail = doc.tail();
        assert_eq!(doc.line_number(tail), 4);
        assert_eq!(doc.line_number(doc.head()), 1);
        assert_eq!(doc.next(tail), None);
        assert_eq!(doc.prev(doc.head()), None);
        assert_eq!(doc.iter_from(tail).count(), 1);
    }

    #[test]
    fn test_check_links_detects_broken_back_link() {
        let mut doc = Document::from_bytes(b"a\nb\nc");
        let second = doc.next(doc.head()).unwrap();
        doc.lines[second.0].prev = None;
        assert_eq!(
            doc.check_links(),
            Err(LinkError::BrokenBackLink {
                line: doc.head(),
                next: second
            })
        );
    }

    #[test]
    fn test_check_links_detects_cycle() {
        let mut doc = Document::from_bytes(b"a\nb");
        let tail = doc.tail();
        doc.lines[tail.0].next = Some(tail);
        doc.lines[tail.0].prev = Some(tail);
        assert!(doc.check_links().is_err());
    }

    #[test]
    fn test_check_links_detects_unreachable() {
        let mut doc = Document::from_bytes(b"a\nb");
        doc.lines.push(Line::default());
        assert_eq!(
            doc.check_links(),
            Err(LinkError::Unreachable {
                reachable: 2,
                total: 3
            })
        );
    }
}
