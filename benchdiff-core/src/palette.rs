// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Terminal colour palettes.
//!
//! The reporter never emits escape codes itself. It asks a [`Palette`] to
//! decorate text for a [`Role`], so colour can be turned off without
//! touching the report layout.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// What a piece of report text means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Banners and section titles
    Header,
    Improvement,
    Regression,
    /// New, removed and skipped benchmarks
    Notice,
    Error,
}

/// Stateless text decoration.
pub trait Palette {
    fn colorize(&self, text: &str, role: Role) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn colorize(&self, text: &str, _role: Role) -> String {
        text.to_string()
    }
}

/// ANSI colours via crossterm.
///
/// crossterm drops the escape codes when its `NO_COLOR` switch is on; see
/// `Colored::set_ansi_color_disabled`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn colorize(&self, text: &str, role: Role) -> String {
        let styled = match role {
            Role::Header => text.with(Color::DarkBlue),
            Role::Improvement => text.with(Color::DarkGreen),
            Role::Regression | Role::Error => text.with(Color::DarkRed),
            Role::Notice => text.with(Color::Yellow).bold(),
        };
        styled.to_string()
    }
}

/// When to use colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether output written to `stream` should be coloured.
    pub fn enabled_for<S: IsTty>(self, stream: &S) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stream.is_tty(),
        }
    }

    /// Resolve the choice against the current stdout.
    pub fn palette(self) -> Box<dyn Palette> {
        if self.enabled_for(&std::io::stdout()) {
            Box::new(AnsiPalette)
        } else {
            Box::new(PlainPalette)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Colored;

    fn ansi() -> AnsiPalette {
        // NO_COLOR in the test environment would strip the codes
        Colored::set_ansi_color_disabled(false);
        AnsiPalette
    }

    #[test]
    fn test_plain_palette_is_identity() {
        let palette = PlainPalette;
        let roles = [
            Role::Header,
            Role::Improvement,
            Role::Regression,
            Role::Notice,
            Role::Error,
        ];
        for role in roles {
            assert_eq!(palette.colorize("BM_trim", role), "BM_trim");
        }
    }

    #[test]
    fn test_ansi_palette_wraps_text() {
        let out = ansi().colorize("REGRESSIONS", Role::Regression);
        assert!(out.contains("REGRESSIONS"));
        assert!(out.starts_with('\u{1b}'));
        assert_ne!(out, "REGRESSIONS");
    }

    #[test]
    fn test_roles_use_distinct_colours() {
        let palette = ansi();
        let green = palette.colorize("x", Role::Improvement);
        let red = palette.colorize("x", Role::Regression);
        let blue = palette.colorize("x", Role::Header);
        assert_ne!(green, red);
        assert_ne!(green, blue);
        assert_ne!(red, blue);
    }

    #[test]
    fn test_enabled_for_explicit_choices() {
        let stdout = std::io::stdout();
        assert!(ColorChoice::Always.enabled_for(&stdout));
        assert!(!ColorChoice::Never.enabled_for(&stdout));
    }

    #[test]
    fn test_never_is_plain() {
        let palette = ColorChoice::Never.palette();
        assert_eq!(palette.colorize("text", Role::Header), "text");
    }
}
