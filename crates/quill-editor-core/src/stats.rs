//! Word count and reading time for the editor status line.

use std::fmt;

use serde::Serialize;

/// Average reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize)]
pub struct EditorStats {
    pub words: usize,
    pub reading_minutes: usize,
}

impl EditorStats {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            words,
            reading_minutes: reading_time_minutes(words),
        }
    }
}

impl fmt::Display for EditorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words, {} min", self.words, self.reading_minutes)
    }
}

/// Whitespace-separated words; blank text has none.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words`, rounded up, never less than one.
pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
