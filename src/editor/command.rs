//! Command line: prompt state and command evaluation.

use thiserror::Error;

/// A command understood by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `q`: leave the editor.
    Quit,
}

/// The command line did not name a known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid command: {0}")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Parse a complete command line. Matching is exact.
    pub fn parse(text: &[u8]) -> Result<Self, UnknownCommand> {
        match text {
            b"q" => Ok(Self::Quit),
            other => Err(UnknownCommand(String::from_utf8_lossy(other).into_owned())),
        }
    }
}

/// Text typed after the prompt, plus the message of the last failed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    command_line: Vec<u8>,
    error_message: Vec<u8>,
}

impl Prompt {
    /// Start a fresh command: clears both the typed text and any error.
    pub fn begin(&mut self) {
        self.command_line.clear();
        self.error_message.clear();
    }

    /// Append a byte to the command line.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.command_line.push(byte);
    }

    /// Remove the last byte of the command line, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.command_line.pop()
    }

    /// Text typed so far.
    #[inline]
    pub fn command_line(&self) -> &[u8] {
        &self.command_line
    }

    /// Message of the last failed command; empty if none.
    #[inline]
    pub fn error_message(&self) -> &[u8] {
        &self.error_message
    }

    /// Whether an error message is pending.
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Record a failed command.
    pub fn fail(&mut self, error: &UnknownCommand) {
        self.error_message = error.to_string().into_bytes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(Command::parse(b"q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(Command::parse(b"q ").is_err());
        assert!(Command::parse(b"quit").is_err());
        assert!(Command::parse(b"").is_err());
    }

    #[test]
    fn test_unknown_command_message() {
        let err = Command::parse(b"zzz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: zzz");

        let mut prompt = Prompt::default();
        prompt.fail(&err);
        assert!(prompt.has_error());
        assert_eq!(prompt.error_message(), b"Invalid command: zzz");
    }

    #[test]
    fn test_begin_clears_state() {
        let mut prompt = Prompt::default();
        prompt.push(b'x');
        prompt.fail(&UnknownCommand("x".into()));
        prompt.begin();
        assert!(prompt.command_line().is_empty());
        assert!(!prompt.has_error());
    }

    #[test]
    fn test_pop_on_empty() {
        let mut prompt = Prompt::default();
        assert_eq!(prompt.pop(), None);
        prompt.push(b'a');
        assert_eq!(prompt.pop(), Some(b'a'));
    }
}
