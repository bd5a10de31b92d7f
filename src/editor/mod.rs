//! Editor: modal editing state over one document.
//!
//! The editor owns the document, one pane, the command prompt and the
//! active [`Mode`]. Keys go in through [`Editor::handle_key`]; frames come
//! out through [`Editor::render`]. Nothing here touches the terminal.

mod command;
mod config;
mod key;
mod mode;
mod modes;
mod pane;
mod render;
mod theme;

pub use command::{Command, Prompt, UnknownCommand};
pub use config::{EditorConfig, UNNAMED_PANE};
pub use key::KeyEvent;
pub use mode::Mode;
pub use pane::{ColumnLimit, Pane};
pub use render::COMMAND_PROMPT;
pub use theme::{palette, Theme};

use crate::document::Document;
use modes::Transition;

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The key has no binding in the current mode.
    Ignored,
    /// The key was applied.
    Handled,
    /// The key asked the editor to exit.
    Exit,
}

/// A modal editor over a single document.
#[derive(Debug, Clone)]
pub struct Editor {
    mode: Mode,
    prompt: Prompt,
    should_exit: bool,
    document: Document,
    pane: Pane,
    theme: Theme,
}

impl Editor {
    /// Create an editor over `text` with the default configuration.
    pub fn new(text: &[u8]) -> Self {
        Self::with_config(text, EditorConfig::default())
    }

    /// Create an editor over `text`.
    pub fn with_config(text: &[u8], config: EditorConfig) -> Self {
        let document = Document::from_bytes(text);
        let pane = Pane::new(&document, &config);
        tracing::debug!(lines = document.len(), name = %pane.name(), "editor created");
        Self {
            mode: Mode::Normal,
            prompt: Prompt::default(),
            should_exit: false,
            document,
            pane,
            theme: config.theme,
        }
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let transition = match self.mode {
            Mode::Normal => modes::normal(key, &mut self.document, &mut self.pane, &mut self.prompt),
            Mode::Insert => modes::insert(key, &mut self.document, &mut self.pane),
            Mode::Command => modes::command(key, &mut self.prompt),
        };
        tracing::trace!(?key, mode = %self.mode, ?transition, "key");

        match transition {
            Transition::Ignored => Outcome::Ignored,
            Transition::Stay => Outcome::Handled,
            Transition::Switch(mode) => {
                self.set_mode(mode);
                Outcome::Handled
            }
            Transition::Quit => {
                self.set_mode(Mode::Normal);
                self.should_exit = true;
                tracing::debug!("quit requested");
                Outcome::Exit
            }
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode change");
            self.mode = mode;
        }
    }

    /// Active mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the quit command has run.
    #[inline]
    pub const fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// The document being edited.
    #[inline]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The focused pane.
    #[inline]
    pub const fn pane(&self) -> &Pane {
        &self.pane
    }

    /// Command prompt state.
    #[inline]
    pub const fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Colors used by [`Editor::render`].
    #[inline]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(editor: &mut Editor, keys: &[u8]) -> Vec<Outcome> {
        KeyEvent::decode(keys)
            .into_iter()
            .map(|key| editor.handle_key(key))
            .collect()
    }

    #[test]
    fn test_insert_then_backspace_twice() {
        let mut editor = Editor::new(b"");
        press(&mut editor, b"ihi");
        assert_eq!(editor.document().to_bytes(), b"hi");
        assert_eq!(editor.pane().cursor_col(), 2);

        press(&mut editor, b"\x7f\x7f");
        assert_eq!(editor.document().to_bytes(), b"");
        assert_eq!(editor.pane().cursor_col(), 0);
        assert_eq!(editor.mode(), Mode::Insert);
    }

    #[test]
    fn test_open_line_below() {
        let mut editor = Editor::new(b"abc");
        press(&mut editor, b"lo");
        assert_eq!(editor.mode(), Mode::Insert);
        assert_eq!(editor.document().len(), 2);
        assert_eq!(editor.pane().cursor_line_no(), 2);
        assert_eq!(editor.pane().cursor_col(), 0);

        press(&mut editor, b"xy\x1b");
        assert_eq!(editor.document().to_bytes(), b"abc\nxy");
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.pane().cursor_col(), 1);
    }

    #[test]
    fn test_invalid_command_sets_error() {
        let mut editor = Editor::new(b"abc");
        let outcomes = press(&mut editor, b" zzz\r");
        assert_eq!(outcomes.last(), Some(&Outcome::Handled));
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.prompt().error_message(), b"Invalid command: zzz");
        assert!(!editor.should_exit());
        assert!(editor.bottom_row_used());

        press(&mut editor, b" ");
        assert!(!editor.prompt().has_error());
        assert_eq!(editor.mode(), Mode::Command);
    }

    #[test]
    fn test_quit_command() {
        let mut editor = Editor::new(b"abc");
        let outcomes = press(&mut editor, b" q\r");
        assert_eq!(outcomes, [Outcome::Handled, Outcome::Handled, Outcome::Exit]);
        assert!(editor.should_exit());
        assert_eq!(editor.mode(), Mode::Normal);
    }

    #[test]
    fn test_ctrl_chords_are_ignored_everywhere() {
        let mut editor = Editor::new(b"abc");
        assert_eq!(editor.handle_key(KeyEvent::ctrl(b'x')), Outcome::Ignored);
        press(&mut editor, b"i");
        assert_eq!(editor.handle_key(KeyEvent::ctrl(b'x')), Outcome::Ignored);
        press(&mut editor, b"\x1b ");
        assert_eq!(editor.handle_key(KeyEvent::ctrl(b'x')), Outcome::Ignored);
        assert_eq!(editor.document().to_bytes(), b"abc");
        assert!(editor.prompt().command_line().is_empty());
    }

    #[test]
    fn test_cursor_stays_valid_through_edits() {
        let mut editor = Editor::new(b"one\ntwo\nthree");
        for keys in [&b"Gx"[..], b"A!\x1b", b"kkx", b"o\x1b", b"jjjl", b"0x"] {
            press(&mut editor, keys);
            assert!(editor.pane().is_valid(editor.document()));
            editor.document().check_links().unwrap();
        }
    }
}
