//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::RwLock;

use crate::scoring::Tier;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Tier colors
    pub excellent: Color,
    pub good: Color,
    pub acceptable: Color,
    pub critical: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            excellent: Color::Green,
            good: Color::LightGreen,
            acceptable: Color::Yellow,
            critical: Color::Red,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Const light theme for terminals with bright backgrounds
    const fn light_const() -> Self {
        Self {
            excellent: Color::Green,
            good: Color::Green,
            acceptable: Color::Rgb(180, 120, 0),
            critical: Color::Red,

            primary: Color::Blue,
            accent: Color::Magenta,
            muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            text: Color::Black,
            text_muted: Color::DarkGray,

            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
        }
    }

    /// Color for a tier badge or score
    #[must_use]
    pub const fn tier(&self, tier: Tier) -> Color {
        match tier {
            Tier::Excellent => self.excellent,
            Tier::Good => self.good,
            Tier::Acceptable => self.acceptable,
            Tier::Critical => self.critical,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark_const()
    }
}

/// Available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse a theme name, defaulting to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Canonical theme name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The theme's color scheme
    #[must_use]
    pub const fn scheme(&self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme::dark_const(),
            Self::Light => ColorScheme::light_const(),
        }
    }
}

static CURRENT_THEME: RwLock<Theme> = RwLock::new(Theme::Dark);

/// Current color scheme. Cheap: the scheme is `Copy`.
#[must_use]
pub fn colors() -> ColorScheme {
    CURRENT_THEME
        .read()
        .map_or_else(|_| ColorScheme::dark_const(), |t| t.scheme())
}

/// Set the active theme.
pub fn set_theme(theme: Theme) {
    if let Ok(mut current) = CURRENT_THEME.write() {
        *current = theme;
    }
}

/// Flip between dark and light, returning the new theme.
pub fn toggle_theme() -> Theme {
    let next = match CURRENT_THEME.read().map(|t| *t) {
        Ok(Theme::Dark) => Theme::Light,
        _ => Theme::Dark,
    };
    set_theme(next);
    next
}
