use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::browser::save_status::{SaveIndicator, SaveState};
use crate::ui::note_input::NoteInput;
use crate::ui::theme::{Theme, ThemeColors};

/// Note editor plus the transient save-status indicator in the title.
pub struct NotePanel<'a> {
    pub input: &'a NoteInput,
    pub editing: bool,
    pub status: &'a SaveIndicator,
    pub theme: &'a Theme,
}

impl Widget for NotePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut title_spans = vec![Span::raw(" Notes ")];
        let label = self.status.label();
        if !label.is_empty() {
            let status_color = match self.status.state() {
                SaveState::Saving => colors.warning(),
                SaveState::Saved => colors.success(),
                SaveState::Error => colors.error(),
                SaveState::Idle => colors.fg(),
            };
            title_spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(status_color),
            ));
        }

        let border = if self.editing {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if self.editing {
            editing_lines(self.input, colors)
        } else if self.input.value().is_empty() {
            vec![Line::from(Span::styled(
                "(press e to add a note)",
                Style::default().fg(colors.dim()),
            ))]
        } else {
            self.input
                .value()
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(colors.fg()))))
                .collect()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Split the editor text into lines with a block cursor span. A cursor on
/// a newline (or at end of text) renders as a highlighted space.
fn editing_lines<'a>(input: &'a NoteInput, colors: &ThemeColors) -> Vec<Line<'a>> {
    let text_style = Style::default().fg(colors.fg());
    let cursor_style = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());

    let (before, cursor_char, after) = input.render_parts();

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Span> = Vec::new();

    let mut before_parts = before.split('\n').peekable();
    while let Some(part) = before_parts.next() {
        if before_parts.peek().is_some() {
            let mut spans = std::mem::take(&mut current);
            spans.push(Span::styled(part, text_style));
            lines.push(Line::from(spans));
        } else {
            current.push(Span::styled(part, text_style));
        }
    }

    match cursor_char {
        Some('\n') | None => {
            current.push(Span::styled(" ", cursor_style));
            if cursor_char == Some('\n') {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
        Some(ch) => {
            current.push(Span::styled(ch.to_string(), cursor_style));
        }
    }

    let mut after_parts = after.split('\n');
    if let Some(first) = after_parts.next() {
        current.push(Span::styled(first, text_style));
    }
    lines.push(Line::from(current));
    for part in after_parts {
        lines.push(Line::from(Span::styled(part, text_style)));
    }

    lines
}
