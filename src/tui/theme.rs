// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with F3.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Resolve a config string ("dark", "light", "nord") to a theme
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Entry rendering
    pub word: Color,
    pub phonetic: Color,
    pub part_of_speech: Color,
    pub example: Color,

    // Error banner
    pub error: Color,

    // Busy spinner
    pub busy: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Theme {
    fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::DarkGray,
            word: Color::Yellow,
            phonetic: Color::Magenta,
            part_of_speech: Color::Green,
            example: Color::DarkGray,
            error: Color::Red,
            busy: Color::Yellow,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::Blue,
            log_trace: Color::DarkGray,
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::Gray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::Gray,
            word: Color::Rgb(150, 80, 0),
            phonetic: Color::Magenta,
            part_of_speech: Color::Rgb(0, 110, 0),
            example: Color::Gray,
            error: Color::Red,
            busy: Color::Rgb(150, 80, 0),
            log_error: Color::Red,
            log_warn: Color::Rgb(150, 80, 0),
            log_info: Color::Rgb(0, 110, 0),
            log_debug: Color::Blue,
            log_trace: Color::Gray,
        }
    }

    fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(76, 86, 106),
            word: Color::Rgb(235, 203, 139),
            phonetic: Color::Rgb(180, 142, 173),
            part_of_speech: Color::Rgb(163, 190, 140),
            example: Color::Rgb(76, 86, 106),
            error: Color::Rgb(191, 97, 106),
            busy: Color::Rgb(235, 203, 139),
            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(163, 190, 140),
            log_debug: Color::Rgb(129, 161, 193),
            log_trace: Color::Rgb(76, 86, 106),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_wraps() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("NORD"), ThemeKind::Nord);
    }
}
