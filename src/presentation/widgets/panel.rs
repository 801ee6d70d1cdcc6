//! Bordered panel that draws a view [`Fragment`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::presentation::theme::Theme;
use crate::presentation::views::{Card, Fragment, ListRow, Tone};

const WARNING_PREFIX: &str = "⚠ ";

pub struct FragmentView<'a> {
    fragment: &'a Fragment,
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
    image_caption: Option<&'a str>,
}

impl<'a> FragmentView<'a> {
    #[must_use]
    pub const fn new(fragment: &'a Fragment, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            fragment,
            title,
            theme,
            focused: false,
            image_caption: None,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Shows the card's image reference as a text line with this caption.
    #[must_use]
    pub const fn image_caption(mut self, caption: &'a str) -> Self {
        self.image_caption = Some(caption);
        self
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(self.theme.base_style)
            .title(Span::styled(
                format!(" {} ", self.title),
                self.theme.title_style,
            ))
    }

    fn card_lines(&self, card: &'a Card) -> Vec<Line<'a>> {
        let theme = self.theme;
        let mut lines = vec![Line::from(Span::styled(
            card.title.as_str(),
            theme.active_style,
        ))];

        if !card.body.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(card.body.as_str()));
        }

        if !card.fields.is_empty() {
            lines.push(Line::default());
        }
        for field in &card.fields {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", field.label), theme.label_style),
                Span::raw(field.value.as_str()),
            ]));
        }

        if let (Some(caption), Some(image)) = (self.image_caption, card.image.as_deref()) {
            lines.push(Line::from(vec![
                Span::styled(format!("{caption}: "), theme.label_style),
                Span::styled(image, theme.dimmed_style),
            ]));
        }

        lines
    }

    fn row_item(&self, row: &'a ListRow) -> ListItem<'a> {
        let marker_style = if row.active {
            self.theme.active_style
        } else {
            self.theme.base_style
        };
        let mut spans = vec![
            Span::styled(if row.active { "● " } else { "  " }, marker_style),
            Span::styled(row.title.as_str(), marker_style),
        ];
        if let Some(subtitle) = &row.subtitle {
            spans.push(Span::styled(
                format!("  {subtitle}"),
                self.theme.dimmed_style,
            ));
        }
        ListItem::new(Line::from(spans))
    }

    const fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Muted => self.theme.dimmed_style,
            Tone::Warning => self.theme.warning_style,
        }
    }
}

impl StatefulWidget for FragmentView<'_> {
    /// Cursor of list fragments; ignored otherwise.
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        match self.fragment {
            Fragment::Placeholder { tone, message } => {
                let text = match tone {
                    Tone::Muted => message.clone(),
                    Tone::Warning => format!("{WARNING_PREFIX}{message}"),
                };
                Paragraph::new(text)
                    .style(self.tone_style(*tone))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            Fragment::Card(card) => {
                Paragraph::new(self.card_lines(card))
                    .style(self.theme.base_style)
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            Fragment::List(rows) => {
                let items: Vec<ListItem<'_>> = rows.iter().map(|row| self.row_item(row)).collect();
                let highlight = if self.focused {
                    self.theme.selection_style
                } else {
                    Style::default()
                };
                StatefulWidget::render(
                    List::new(items).highlight_style(highlight),
                    inner,
                    buf,
                    state,
                );
            }
        }
    }
}
