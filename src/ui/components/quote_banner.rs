use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::api::types::Quote;
use crate::app::Remote;
use crate::ui::theme::Theme;

pub struct QuoteBanner<'a> {
    pub quote: &'a Remote<Quote>,
    pub theme: &'a Theme,
}

impl Widget for QuoteBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered().border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.quote {
            Remote::Loading => vec![Line::from("")],
            Remote::Ready(quote) => vec![
                Line::from(Span::styled(
                    format!("\"{}\"", quote.text),
                    Style::default()
                        .fg(colors.fg())
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    format!("— {}", quote.author),
                    Style::default().fg(colors.dim()),
                )),
            ],
            Remote::Failed => vec![
                Line::from(Span::styled(
                    "Error loading quote",
                    Style::default().fg(colors.error()),
                )),
                Line::from(""),
            ],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
