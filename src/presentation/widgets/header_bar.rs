use crate::domain::entities::ThemeMode;
use crate::presentation::theme::Theme;
use crate::presentation::theme::color::with_tone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait ThemeModeExt {
    fn indicator(self) -> &'static str;
}

impl ThemeModeExt for ThemeMode {
    fn indicator(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub mode: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = with_tone(theme.accent, 0.5, 0.08);

        Self {
            background: theme.base_style,
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            mode: theme.active_style,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            mode: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    mode: ThemeMode,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            mode: ThemeMode::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn mode_text(&self) -> String {
        format!(" {} {} ", self.mode.indicator(), self.mode.label())
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ]);
        let left_width = left_line.width() as u16;
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let mode_text = self.mode_text();
        let mode_width = mode_text.width() as u16;
        if mode_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(mode_width);
            let right_area = Rect::new(right_x, area.y, mode_width, 1);
            Paragraph::new(Line::from(Span::styled(mode_text, self.style.mode)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_name_version_and_mode() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("panita", "0.1.0")
            .mode(ThemeMode::Dark)
            .render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("PANITA"));
        assert!(text.contains("v0.1.0"));
        assert!(text.contains("Modo oscuro"));
    }

    #[test]
    fn test_mode_hidden_when_too_narrow() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("panita", "0.1.0")
            .mode(ThemeMode::Light)
            .render(area, &mut buf);

        assert!(!row_text(&buf, 20).contains("claro"));
    }
}
