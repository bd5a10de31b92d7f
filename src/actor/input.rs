//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to turn key presses and resizes into [`TermEvent`]s for the main loop.

use super::messages::TermEvent;
use crate::editor::KeyEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking the shutdown flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(sender: Sender<TermEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("tern-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, || Self::next_event(poll_timeout));
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Wait up to `poll_timeout` for one terminal event.
    fn next_event(poll_timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(poll_timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Main input polling loop.
    ///
    /// A read error is forwarded once as [`TermEvent::Error`] and ends the
    /// loop: a terminal that fails to read does not recover.
    fn run_loop<F>(sender: &Sender<TermEvent>, shutdown: &AtomicBool, mut next: F)
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        while !shutdown.load(Ordering::Relaxed) {
            let event = match next() {
                Ok(Some(event)) => Self::convert_event(event),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    let _ = sender.send(TermEvent::Error(e.to_string()));
                    break;
                }
            };

            if let Some(event) = event {
                // Blocks while the main loop is still handling the last event.
                if sender.send(event).is_err() {
                    break;
                }
            }
        }
        tracing::debug!("input thread stopped");
    }

    /// Convert a crossterm event to a [`TermEvent`].
    pub(crate) fn convert_event(event: Event) -> Option<TermEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Self::convert_key(key_event.code, key_event.modifiers).map(TermEvent::Key)
            }
            Event::Resize(width, height) => Some(TermEvent::Resize { width, height }),
            _ => None,
        }
    }

    /// Convert a crossterm key code to a [`KeyEvent`].
    ///
    /// Only ASCII characters are kept: the editor works on bytes.
    fn convert_key(code: event::KeyCode, mods: KeyModifiers) -> Option<KeyEvent> {
        Some(match code {
            event::KeyCode::Char(c) if c.is_ascii() => KeyEvent::Char {
                byte: c as u8,
                ctrl: mods.contains(KeyModifiers::CONTROL),
            },
            event::KeyCode::Enter => KeyEvent::Enter,
            event::KeyCode::Tab => KeyEvent::Tab,
            event::KeyCode::Backspace => KeyEvent::Backspace,
            event::KeyCode::Esc => KeyEvent::Escape,
            event::KeyCode::Home => KeyEvent::Home,
            event::KeyCode::End => KeyEvent::End,
            event::KeyCode::Delete => KeyEvent::Delete,
            _ => return None,
        })
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
