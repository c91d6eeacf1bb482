use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::api::types::Word;
use crate::app::LoadState;
use crate::ui::theme::Theme;

/// The main card: headword, translation, the three example sentences with
/// their 1-based ordinals, and the position indicator in the title.
pub struct WordCard<'a> {
    pub word: Option<&'a Word>,
    pub state: LoadState,
    pub position: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

impl Widget for WordCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = if self.word.is_some() {
            format!(" Word {} of {} ", self.position, self.total)
        } else {
            " Vocabulary ".to_string()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match (self.state, self.word) {
            (LoadState::Failed, _) => vec![Line::from(Span::styled(
                "Error loading words",
                Style::default().fg(colors.error()),
            ))],
            (LoadState::Loading, _) => vec![Line::from(Span::styled(
                "Loading words...",
                Style::default().fg(colors.dim()),
            ))],
            (LoadState::Ready, None) => vec![Line::from(Span::styled(
                "No words in your list yet.",
                Style::default().fg(colors.dim()),
            ))],
            (LoadState::Ready, Some(word)) => {
                let mut lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        word.word.clone(),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        word.polish_translation.clone(),
                        Style::default().fg(colors.fg()),
                    )),
                    Line::from(""),
                ];
                for (i, example) in word.examples().iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("{}. {}", i + 1, example),
                        Style::default().fg(colors.dim()),
                    )));
                }
                lines
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_word() -> Word {
        Word {
            id: 1,
            word: "ubiquitous".to_string(),
            polish_translation: "wszechobecny".to_string(),
            example_sentence_1: "Phones are ubiquitous now.".to_string(),
            example_sentence_2: "Ads are ubiquitous online.".to_string(),
            example_sentence_3: "Cameras became ubiquitous.".to_string(),
        }
    }

    fn render_to_text(card: WordCard) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn ready_word_shows_ordinal_prefixed_examples_and_position() {
        let theme = Theme::default();
        let word = sample_word();
        let text = render_to_text(WordCard {
            word: Some(&word),
            state: LoadState::Ready,
            position: 3,
            total: 25,
            theme: &theme,
        });
        assert!(text.contains("Word 3 of 25"));
        assert!(text.contains("ubiquitous"));
        assert!(text.contains("wszechobecny"));
        assert!(text.contains("1. Phones are ubiquitous now."));
        assert!(text.contains("2. Ads are ubiquitous online."));
        assert!(text.contains("3. Cameras became ubiquitous."));
    }

    #[test]
    fn failed_fetch_shows_error_text_in_place_of_the_word() {
        let theme = Theme::default();
        let text = render_to_text(WordCard {
            word: None,
            state: LoadState::Failed,
            position: 0,
            total: 0,
            theme: &theme,
        });
        assert!(text.contains("Error loading words"));
        assert!(!text.contains("1. "));
    }
}
