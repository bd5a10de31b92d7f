//! Editor configuration

use super::Theme;

/// Name shown for a pane with no file behind it.
pub const UNNAMED_PANE: &str = "[No Name]";

/// Configuration for an [`Editor`](super::Editor).
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Draw the line-number gutter.
    pub show_line_numbers: bool,
    /// Label shown in the status line.
    pub pane_name: String,
    /// Colors.
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            pane_name: UNNAMED_PANE.to_owned(),
            theme: Theme::default(),
        }
    }
}

impl EditorConfig {
    /// Set whether the gutter is drawn.
    #[must_use]
    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Set the pane name.
    #[must_use]
    pub fn with_pane_name(mut self, name: impl Into<String>) -> Self {
        self.pane_name = name.into();
        self
    }
}
