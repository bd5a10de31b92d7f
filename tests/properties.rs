//! Property tests over random documents and key sequences.

use proptest::prelude::*;
use tern::buffer::flush::encode_frame;
use tern::{Document, Editor, Framebuffer, KeyEvent, Mode, OutputBuffer, Rect};

fn any_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => b'a'..=b'z',
            2 => Just(b'\n'),
            1 => Just(b'\t'),
            1 => Just(0x01u8),
            1 => Just(b' '),
        ],
        0..200,
    )
}

fn any_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        6 => prop::sample::select(b"hjkl0Gxaio A".to_vec()).prop_map(KeyEvent::char),
        3 => (b'a'..=b'z').prop_map(KeyEvent::char),
        1 => Just(KeyEvent::Escape),
        1 => Just(KeyEvent::Backspace),
        1 => Just(KeyEvent::Delete),
        1 => Just(KeyEvent::Enter),
        1 => Just(KeyEvent::Tab),
        1 => Just(KeyEvent::Home),
        1 => Just(KeyEvent::End),
        1 => (b'a'..=b'z').prop_map(KeyEvent::ctrl),
    ]
}

fn any_rect() -> impl Strategy<Value = Rect> {
    (-20i32..20, -20i32..20, -5i32..30, -5i32..30).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Byte length of the cursor line, found by walking from the head.
fn cursor_line_len(editor: &Editor) -> usize {
    editor
        .document()
        .iter()
        .nth(editor.pane().cursor_line_no() - 1)
        .map(|(_, line)| line.len())
        .unwrap_or(usize::MAX)
}

proptest! {
    #[test]
    fn document_round_trips(text in any_text()) {
        let doc = Document::from_bytes(&text);
        let mut expected = text.clone();
        if expected.ends_with(b"\n") {
            expected.pop();
        }
        prop_assert_eq!(doc.to_bytes(), expected);
        prop_assert!(doc.check_links().is_ok());
    }

    #[test]
    fn edits_keep_invariants(text in any_text(), keys in prop::collection::vec(any_key(), 0..120)) {
        let mut editor = Editor::new(&text);
        for key in keys {
            editor.handle_key(key);
            if editor.should_exit() {
                break;
            }

            prop_assert!(editor.document().check_links().is_ok());
            prop_assert!(editor.pane().is_valid(editor.document()));

            let len = cursor_line_len(&editor);
            if editor.mode() == Mode::Normal && len > 0 {
                prop_assert!(editor.pane().cursor_col() < len);
            }
        }
    }

    #[test]
    fn up_at_top_and_down_at_bottom_are_noops(text in any_text(), col_steps in 0usize..10) {
        let mut editor = Editor::new(&text);
        for _ in 0..col_steps {
            editor.handle_key(KeyEvent::char(b'l'));
        }
        let before = (
            editor.pane().cursor_line(),
            editor.pane().cursor_line_no(),
            editor.pane().cursor_col(),
        );
        editor.handle_key(KeyEvent::char(b'k'));
        let after = (
            editor.pane().cursor_line(),
            editor.pane().cursor_line_no(),
            editor.pane().cursor_col(),
        );
        prop_assert_eq!(after, before);

        editor.handle_key(KeyEvent::char(b'G'));
        let before = (
            editor.pane().cursor_line(),
            editor.pane().cursor_line_no(),
            editor.pane().cursor_col(),
        );
        editor.handle_key(KeyEvent::char(b'j'));
        let after = (
            editor.pane().cursor_line(),
            editor.pane().cursor_line_no(),
            editor.pane().cursor_col(),
        );
        prop_assert_eq!(after, before);
        prop_assert_eq!(editor.pane().cursor_line(), editor.document().tail());
        prop_assert_eq!(editor.pane().cursor_line_no(), editor.document().len());
    }

    #[test]
    fn rect_intersection_is_symmetric(a in any_rect(), b in any_rect()) {
        let ab = a.intersect(&b);
        prop_assert_eq!(ab, b.intersect(&a));
        if ab != Rect::EMPTY {
            prop_assert!(ab.x >= a.x.max(b.x));
            prop_assert!(ab.right() <= a.right().min(b.right()));
            prop_assert!(ab.bottom() <= a.bottom().min(b.bottom()));
        }
    }

    #[test]
    fn render_never_writes_outside_the_screen(
        text in any_text(),
        keys in prop::collection::vec(any_key(), 0..40),
        w in 0u16..60,
        h in 0u16..20,
    ) {
        let mut editor = Editor::new(&text);
        for key in keys {
            editor.handle_key(key);
        }
        let mut fb = Framebuffer::new(w, h, editor.theme().text);
        editor.render(&mut fb, Rect::from_size(w, h));
        prop_assert_eq!(fb.len(), usize::from(w) * usize::from(h));

        let mut output = OutputBuffer::new();
        let stats = encode_frame(&fb, &mut output);
        prop_assert_eq!(stats.cells, fb.len());
        prop_assert_eq!(stats.bytes, output.len());
    }
}
