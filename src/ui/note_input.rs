use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Free-text note editor backing the note panel.
///
/// Holds the note for the word currently displayed; navigation replaces
/// the whole text when the next note fetch resolves, so there is nothing
/// to cache across words. Newlines are ordinary characters here.
pub struct NoteInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
}

impl NoteInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replace the whole text, as when a note fetch resolves. The cursor
    /// moves to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled
    /// rendering. When the cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        if self.cursor >= self.text.chars().count() {
            (&self.text, None, "")
        } else {
            let ch = self.text[byte_offset..].chars().next().unwrap();
            let next_byte = byte_offset + ch.len_utf8();
            (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
        }
    }

    pub fn handle(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let byte_offset = self.char_to_byte(self.cursor - 1);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    let byte_offset = self.char_to_byte(self.cursor);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                }
            }
            KeyCode::Enter => {
                self.insert('\n');
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(ch);
            }
            _ => {}
        }
    }

    fn insert(&mut self, ch: char) {
        let byte_offset = self.char_to_byte(self.cursor);
        self.text.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then
    /// non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = NoteInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");
        assert_eq!(input.cursor, 1);

        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn enter_inserts_newline() {
        let mut input = NoteInput::new("first");
        input.handle(key(KeyCode::Enter));
        input.handle(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "first\nx");
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = NoteInput::new("ab");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");

        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");

        // Backspace on empty must not panic
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = NoteInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor, 0);

        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = NoteInput::new("foo bar  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "foo ");

        let mut input2 = NoteInput::new("  foo");
        input2.handle(ctrl('w'));
        assert_eq!(input2.value(), "  ");

        let mut input3 = NoteInput::new("");
        input3.handle(ctrl('w'));
        assert_eq!(input3.value(), "");
    }

    #[test]
    fn ctrl_a_e_u() {
        let mut input = NoteInput::new("test");
        input.handle(ctrl('a'));
        assert_eq!(input.cursor, 0);
        input.handle(ctrl('e'));
        assert_eq!(input.cursor, 4);
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn cursor_clamped_at_both_ends() {
        let mut input = NoteInput::new("a");
        input.handle(key(KeyCode::Right));
        assert_eq!(input.cursor, 1);
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Left));
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn set_text_replaces_and_moves_cursor_to_end() {
        let mut input = NoteInput::new("draft");
        input.handle(key(KeyCode::Home));
        input.set_text("fetched note");
        assert_eq!(input.value(), "fetched note");
        assert_eq!(input.cursor, 12);
    }

    #[test]
    fn multibyte_text_edits_on_char_boundaries() {
        let mut input = NoteInput::new("zażółć");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "zażół");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "zaół");
    }

    #[test]
    fn render_parts_around_cursor() {
        let mut input = NoteInput::new("abc");
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("abc", None, ""));

        input.cursor = 1;
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("a", Some('b'), "c"));
    }

    #[test]
    fn render_parts_cursor_on_newline() {
        let mut input = NoteInput::new("a\nb");
        input.cursor = 1;
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("a", Some('\n'), "b"));
    }
}
