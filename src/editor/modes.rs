//! Per-mode key handlers.
//!
//! Each handler receives only the state its mode may touch and reports
//! what should happen next as a [`Transition`].

use crate::document::Document;

use super::command::{Command, Prompt};
use super::pane::{ColumnLimit, Pane};
use super::{KeyEvent, Mode};

/// Result of a mode handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// The key has no binding in this mode.
    Ignored,
    /// Handled; the mode stays.
    Stay,
    /// Handled; switch to the given mode.
    Switch(Mode),
    /// The quit command ran.
    Quit,
}

pub(crate) fn normal(
    key: KeyEvent,
    document: &mut Document,
    pane: &mut Pane,
    prompt: &mut Prompt,
) -> Transition {
    let byte = match key {
        KeyEvent::Char { byte, ctrl: false } => byte,
        KeyEvent::Home => {
            pane.line_start();
            return Transition::Stay;
        }
        KeyEvent::End => {
            pane.line_end(document, ColumnLimit::LastByte);
            return Transition::Stay;
        }
        _ => return Transition::Ignored,
    };

    match byte {
        b' ' => {
            prompt.begin();
            Transition::Switch(Mode::Command)
        }
        b'i' => Transition::Switch(Mode::Insert),
        b'a' => {
            pane.step_right(document, ColumnLimit::PastEnd);
            Transition::Switch(Mode::Insert)
        }
        b'A' => {
            pane.line_end(document, ColumnLimit::PastEnd);
            Transition::Switch(Mode::Insert)
        }
        b'o' => {
            pane.open_line(document);
            Transition::Switch(Mode::Insert)
        }
        b'h' => {
            pane.step_left();
            Transition::Stay
        }
        b'l' => {
            pane.step_right(document, ColumnLimit::LastByte);
            Transition::Stay
        }
        b'j' => {
            pane.line_down(document);
            Transition::Stay
        }
        b'k' => {
            pane.line_up(document);
            Transition::Stay
        }
        b'0' => {
            pane.line_start();
            Transition::Stay
        }
        b'G' => {
            pane.last_line(document);
            Transition::Stay
        }
        b'x' => {
            pane.delete_under_normal(document);
            Transition::Stay
        }
        _ => Transition::Ignored,
    }
}

pub(crate) fn insert(key: KeyEvent, document: &mut Document, pane: &mut Pane) -> Transition {
    if let Some(byte) = key.printable() {
        pane.insert_byte(document, byte);
        return Transition::Stay;
    }

    match key {
        KeyEvent::Escape => {
            pane.step_left();
            Transition::Switch(Mode::Normal)
        }
        KeyEvent::Backspace => {
            pane.backspace(document);
            Transition::Stay
        }
        KeyEvent::Delete => {
            pane.delete_under(document);
            Transition::Stay
        }
        KeyEvent::Home => {
            pane.line_start();
            Transition::Stay
        }
        KeyEvent::End => {
            pane.line_end(document, ColumnLimit::PastEnd);
            Transition::Stay
        }
        _ => Transition::Ignored,
    }
}

pub(crate) fn command(key: KeyEvent, prompt: &mut Prompt) -> Transition {
    if let Some(byte) = key.printable() {
        prompt.push(byte);
        return Transition::Stay;
    }

    match key {
        KeyEvent::Escape => Transition::Switch(Mode::Normal),
        KeyEvent::Backspace => {
            prompt.pop();
            Transition::Stay
        }
        KeyEvent::Enter => match Command::parse(prompt.command_line()) {
            Ok(Command::Quit) => Transition::Quit,
            Err(err) => {
                tracing::debug!(%err, "command rejected");
                prompt.fail(&err);
                Transition::Switch(Mode::Normal)
            }
        },
        _ => Transition::Ignored,
    }
}
