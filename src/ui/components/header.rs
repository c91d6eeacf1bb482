use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::api::types::UserProfile;
use crate::ui::theme::Theme;

/// One-line header: brand badge, the signed-in user, and the word total.
/// The avatar image can't be drawn in a terminal, so the user slot shows
/// an initial badge labelled with the name instead.
pub struct Header<'a> {
    pub user: Option<&'a UserProfile>,
    pub total: usize,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans = vec![Span::styled(
            " lexigo ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(user) = self.user {
            let initial = user.name.chars().next().unwrap_or('?');
            spans.push(Span::styled(
                format!(" ({initial}) {} ", user.name),
                Style::default().fg(colors.fg()).bg(colors.header_bg()),
            ));
        }

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()));
        bar.render(area, buf);

        let total_text = format!(" {} words ", self.total);
        let x = area
            .x
            .saturating_add(area.width.saturating_sub(total_text.len() as u16));
        buf.set_string(
            x,
            area.y,
            &total_text,
            Style::default().fg(colors.dim()).bg(colors.header_bg()),
        );
    }
}
