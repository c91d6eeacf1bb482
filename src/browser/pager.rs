use crate::api::types::Word;

/// Ordered word list plus the cursor into it.
///
/// Invariant: `cursor < words.len()` whenever the list is non-empty. The
/// cursor never wraps; navigation clamps at both ends. An empty list has
/// no active cursor and `current()` is None.
#[derive(Debug, Default)]
pub struct WordPager {
    words: Vec<Word>,
    cursor: usize,
}

impl WordPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement, as on page load. The cursor resets to 0.
    pub fn set_words(&mut self, words: Vec<Word>) {
        self.words = words;
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 1-based position indicator; 0 when the list is empty.
    pub fn position(&self) -> usize {
        if self.words.is_empty() { 0 } else { self.cursor + 1 }
    }

    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.cursor)
    }

    /// Move the cursor. Out-of-bounds indices are a silent no-op; returns
    /// whether the cursor was actually set.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.words.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    pub fn prev_enabled(&self) -> bool {
        !self.words.is_empty() && self.cursor > 0
    }

    pub fn next_enabled(&self) -> bool {
        !self.words.is_empty() && self.cursor + 1 < self.words.len()
    }
}
