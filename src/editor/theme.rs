//! Color theme

use crate::buffer::{Rgb, Style};

/// Palette the default theme is built from.
pub mod palette {
    use crate::buffer::Rgb;

    /// Editor background.
    pub const BG: Rgb = Rgb::from_u32(0x28_2c_34);
    /// Default text.
    pub const WHITE: Rgb = Rgb::from_u32(0xab_b2_bf);
    /// Normal and Command mode accent.
    pub const GREEN: Rgb = Rgb::from_u32(0x98_c3_79);
    /// Insert mode accent.
    pub const BLUE: Rgb = Rgb::from_u32(0x61_af_ef);
    /// Errors.
    pub const RED: Rgb = Rgb::from_u32(0xe0_6c_75);
    /// Non-printable placeholders.
    pub const YELLOW: Rgb = Rgb::from_u32(0xe5_c0_7b);
    /// Status line fill.
    pub const LIGHT_BG: Rgb = Rgb::from_u32(0x2c_32_3c);
    /// Secondary badges.
    pub const LIGHTER_BG: Rgb = Rgb::from_u32(0x3e_44_52);
    /// Gutter text.
    pub const GUTTER: Rgb = Rgb::from_u32(0x4b_52_63);
}

/// Styles used when rendering a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Document text and the framebuffer base style.
    pub text: Style,
    /// Line numbers and the command prompt.
    pub gutter: Style,
    /// `<xx>` placeholders for non-printable bytes.
    pub nonprint: Style,
    /// Background of the whole status line.
    pub status_fill: Rgb,
    /// Mode badge in Normal mode.
    pub normal_badge: Style,
    /// Mode badge in Insert mode.
    pub insert_badge: Style,
    /// Mode badge in Command mode.
    pub command_badge: Style,
    /// Pane name badge.
    pub name_badge: Style,
    /// Error message on the command row.
    pub error: Style,
}

impl Theme {
    /// Badge style for `mode`.
    pub const fn badge(&self, mode: super::Mode) -> Style {
        match mode {
            super::Mode::Normal => self.normal_badge,
            super::Mode::Insert => self.insert_badge,
            super::Mode::Command => self.command_badge,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        use palette::*;
        Self {
            text: Style { fg: WHITE, bg: BG },
            gutter: Style { fg: GUTTER, bg: BG },
            nonprint: Style { fg: YELLOW, bg: BG },
            status_fill: LIGHT_BG,
            normal_badge: Style { fg: BG, bg: GREEN },
            insert_badge: Style { fg: BG, bg: BLUE },
            command_badge: Style { fg: BG, bg: GREEN },
            name_badge: Style {
                fg: WHITE,
                bg: LIGHTER_BG,
            },
            error: Style { fg: RED, bg: BG },
        }
    }
}
