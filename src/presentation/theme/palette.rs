use ratatui::style::{Color, Modifier, Style};

use super::color::{parse_color, with_tone};
use crate::domain::entities::ThemeMode;

/// Resolved styles for one mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub accent: Color,
    pub base_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub title_style: Style,
    pub label_style: Style,
    pub selection_style: Style,
    pub active_style: Style,
    pub dimmed_style: Style,
    pub warning_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default(), "Yellow")
    }
}

impl Theme {
    #[must_use]
    pub fn new(mode: ThemeMode, accent_color_str: &str) -> Self {
        Self::from_color(mode, parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(mode: ThemeMode, accent: Color) -> Self {
        let (background, foreground, muted) = match mode {
            ThemeMode::Light => (
                Color::Rgb(250, 248, 242),
                Color::Rgb(30, 30, 30),
                Color::Rgb(110, 110, 110),
            ),
            ThemeMode::Dark => (
                Color::Rgb(18, 18, 24),
                Color::Rgb(230, 230, 230),
                Color::DarkGray,
            ),
        };

        let (selection_bg, active_fg) = match mode {
            ThemeMode::Light => (with_tone(accent, 0.6, 0.85), with_tone(accent, 0.8, 0.3)),
            ThemeMode::Dark => (with_tone(accent, 0.3, 0.2), with_tone(accent, 0.9, 0.65)),
        };

        let base_style = Style::default().bg(background).fg(foreground);

        Self {
            mode,
            accent,
            base_style,
            border_style: base_style.fg(muted),
            focused_border_style: base_style.fg(active_fg).add_modifier(Modifier::BOLD),
            title_style: base_style.add_modifier(Modifier::BOLD),
            label_style: base_style.fg(active_fg).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(foreground),
            active_style: base_style.fg(active_fg).add_modifier(Modifier::BOLD),
            dimmed_style: base_style.fg(muted),
            warning_style: base_style.fg(match mode {
                ThemeMode::Light => Color::Rgb(170, 60, 0),
                ThemeMode::Dark => Color::LightYellow,
            }),
        }
    }

    /// Same accent, other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_color(self.mode.toggled(), self.accent)
    }
}
