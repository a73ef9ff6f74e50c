//! Styling for the portfolio page.
//!
//! Two modes only: dark (the default) and light. The mode string is the same
//! one stored in the `data-theme` attribute and in the saved preference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from a hex value (0xRRGGBB).
    #[must_use]
    pub fn hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Formats the color as a CSS `rgba(...)` string with 0-255 channels.
    #[must_use]
    pub fn css(self) -> String {
        self.to_string()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel(v: f32) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b),
            self.a
        )
    }
}

/// The page color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light glyphs and text on a dark page.
    #[default]
    Dark,
    /// Dark glyphs and text on a light page.
    Light,
}

impl ThemeMode {
    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the attribute/preference string for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses an attribute/preference string. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Returns true for the dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete palette for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Cards and panels.
    pub surface: Color,
    /// Accent color (links, active dots).
    pub accent: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub text_muted: Color,
    /// Ink for the background glyph field. Alpha comes from each glyph.
    pub glyph_ink: Color,
}

impl Theme {
    /// Dark palette.
    pub const DARK: Self = Self {
        background: Color::rgb(0.04, 0.04, 0.06),
        surface: Color::rgba(0.09, 0.09, 0.12, 0.95),
        accent: Color::rgb(0.39, 0.4, 0.95),
        text: Color::rgb(0.93, 0.93, 0.95),
        text_muted: Color::rgb(0.58, 0.6, 0.66),
        glyph_ink: Color::WHITE,
    };

    /// Light palette.
    pub const LIGHT: Self = Self {
        background: Color::rgb(0.98, 0.98, 0.99),
        surface: Color::WHITE,
        accent: Color::rgb(0.31, 0.27, 0.9),
        text: Color::rgb(0.07, 0.09, 0.15),
        text_muted: Color::rgb(0.42, 0.45, 0.5),
        glyph_ink: Color::BLACK,
    };

    /// Returns the palette for a mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Dark => &Self::DARK,
            ThemeMode::Light => &Self::LIGHT,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Color::WHITE.with_alpha(0.05).css(), "rgba(255,255,255,0.05)");
        assert_eq!(Color::BLACK.with_alpha(0.1).css(), "rgba(0,0,0,0.1)");
    }

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF0000);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!(color.g.abs() < 0.01);
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_mode_round_trip_and_unknown() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_glyph_ink_contrasts_background() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).glyph_ink, Color::WHITE);
        assert_eq!(Theme::for_mode(ThemeMode::Light).glyph_ink, Color::BLACK);
    }
}
