//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the widget, supporting the
//! built-in day/night pair and custom themes loaded from TOML files. It
//! provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `night`: Dark theme (default)
//! - `day`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e6f0"
//! selection_fg = "#0a0a14"
//! selection_bg = "#8ab4f8"
//! text_normal = "#d2d2dc"
//! text_dim = "#72727e"
//! border = "#32323e"
//! overlay_border = "#8ab4f8"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#f2d675"
//! empty_state_fg = "#8ab4f8"
//! accent_fg = "#f2d675"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookstall::ui::Theme;
//!
//! let theme = Theme::from_name("night").unwrap();
//! let styled = format!("{}title{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(styled.starts_with("\u{001b}[38;2;"));
//! ```

use crate::domain::{BookstallError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names of the themes compiled into the binary, in settings display order.
pub const BUILT_IN_THEMES: &[&str] = &["day", "night"];

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#8ab4f8"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Border color for overlay boxes (search form, settings, detail).
    pub overlay_border: String,
    /// Picker match highlight foreground.
    pub match_highlight_fg: String,
    /// Picker match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Accent color for years, counters, and the detail title.
    pub accent_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `day`, `night`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookstall::ui::Theme;
    ///
    /// let theme = Theme::from_name("day").unwrap();
    /// assert_eq!(theme.name, "day");
    /// assert!(Theme::from_name("dusk").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookstallError::Theme`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bookstall::ui::Theme;
    ///
    /// let theme = Theme::from_file("/path/to/theme.toml")?;
    /// # Ok::<(), bookstall::domain::BookstallError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookstallError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BookstallError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (night).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("night").expect("built-in night theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_all_parse() {
        for name in BUILT_IN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(&theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("dusk").is_none());
        assert!(Theme::from_name("").is_none());
    }

    #[test]
    fn default_theme_is_night() {
        assert_eq!(Theme::default().name, "night");
    }

    #[test]
    fn fg_and_bg_emit_truecolor_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{001b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#ff00"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("not-a-color"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_round_trips_through_a_file() {
        let theme = Theme::default();
        let toml_str = toml::to_string(&theme).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, theme.name);
        assert_eq!(loaded.colors.selection_bg, theme.colors.selection_bg);
    }

    #[test]
    fn unreadable_or_invalid_files_are_theme_errors() {
        let missing = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(missing, BookstallError::Theme(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        let invalid = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(invalid, BookstallError::Theme(_)));
    }
}
