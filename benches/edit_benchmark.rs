//! Editing benchmark: key handling throughput on a large document.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tern::{Document, Editor, KeyEvent};

fn create_test_text(lines: usize) -> Vec<u8> {
    let mut text = Vec::new();
    for i in 0..lines {
        text.extend_from_slice(format!("line {i}: the quick brown fox jumps over the lazy dog\n").as_bytes());
    }
    text
}

fn load_document(c: &mut Criterion) {
    let text = create_test_text(10_000);
    c.bench_function("document_from_bytes_10k", |b| {
        b.iter(|| black_box(Document::from_bytes(black_box(&text))));
    });
}

fn typing(c: &mut Criterion) {
    let text = create_test_text(1000);
    let keys = KeyEvent::decode(b"Ahello world\x1bjA more text\x1b0xxxx");

    c.bench_function("typing_burst", |b| {
        b.iter_batched(
            || Editor::new(&text),
            |mut editor| {
                for &key in &keys {
                    editor.handle_key(key);
                }
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn navigation(c: &mut Criterion) {
    let text = create_test_text(1000);
    let mut editor = Editor::new(&text);

    c.bench_function("jump_last_and_back", |b| {
        b.iter(|| {
            editor.handle_key(KeyEvent::char(b'G'));
            for _ in 0..100 {
                editor.handle_key(KeyEvent::char(b'k'));
            }
            black_box(editor.pane().cursor_line_no())
        });
    });
}

fn open_lines(c: &mut Criterion) {
    let keys = KeyEvent::decode(b"oabc\x1b");
    c.bench_function("open_line_x100", |b| {
        b.iter_batched(
            || Editor::new(b""),
            |mut editor| {
                for _ in 0..100 {
                    for &key in &keys {
                        editor.handle_key(key);
                    }
                }
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, load_document, typing, navigation, open_lines);
criterion_main!(benches);
