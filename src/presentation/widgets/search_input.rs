//! Region filter box.

use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line filter input. Edits only at the end of the text.
#[derive(Debug, Clone)]
pub struct SearchInput {
    value: String,
    focused: bool,
    placeholder: String,
    label: String,
}

impl SearchInput {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            focused: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Removes the last character. Returns false if there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Widget bound to a palette.
    #[must_use]
    pub const fn themed<'a>(&'a self, theme: &'a Theme) -> ThemedSearchInput<'a> {
        ThemedSearchInput { input: self, theme }
    }
}

pub struct ThemedSearchInput<'a> {
    input: &'a SearchInput,
    theme: &'a Theme,
}

impl Widget for ThemedSearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let border_style = if input.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };
        let text_style = if input.value.is_empty() {
            self.theme.dimmed_style
        } else {
            self.theme.base_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.theme.base_style)
            .title(input.label.as_str());
        let inner = block.inner(area);

        block.render(area, buf);
        Paragraph::new(input.display_text())
            .style(text_style)
            .render(inner, buf);

        if input.focused && inner.width > 0 && inner.height > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + input.value.width() as u16;
            if cursor_x < inner.right() {
                buf[(cursor_x, inner.y)].set_style(self.theme.selection_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = SearchInput::new("Buscar");
        assert!(input.value().is_empty());

        input.input_char('c');
        input.input_char('a');
        input.input_char('\n');
        assert_eq!(input.value(), "ca");

        assert!(input.backspace());
        assert!(input.backspace());
        assert!(!input.backspace());
    }

    #[test]
    fn test_backspace_removes_whole_accented_char() {
        let mut input = SearchInput::new("Buscar");
        for c in "Pacífico".chars() {
            input.input_char(c);
        }
        for _ in 0..5 {
            input.backspace();
        }
        assert_eq!(input.value(), "Pac");
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let input = SearchInput::new("Buscar").placeholder("Filtrar regiones");
        assert_eq!(input.display_text(), "Filtrar regiones");
    }
}
