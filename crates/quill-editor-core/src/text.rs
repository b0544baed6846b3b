//! Text buffer abstraction for editor storage.
//!
//! The `TextBuffer` trait lets the markup editor splice into whatever storage
//! the host keeps its field contents in. `EditorRope` is the ropey-backed
//! default.

use smol_str::{SmolStr, ToSmolStr};
use std::ops::Range;

/// A text buffer that supports char-offset editing.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
pub trait TextBuffer {
    /// Total length in chars (Unicode scalar values).
    fn len_chars(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert text at char offset.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Append text at end.
    fn push(&mut self, text: &str) {
        self.insert(self.len_chars(), text);
    }

    /// Delete char range.
    fn delete(&mut self, char_range: Range<usize>);

    /// Replace char range with text.
    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        self.delete(char_range.clone());
        self.insert(char_range.start, text);
    }

    /// Get a slice as SmolStr. Returns None if range is invalid.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Convert entire buffer to String.
    fn to_string(&self) -> String;
}

/// Ropey-backed text buffer.
#[derive(Clone, Debug, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    /// Create from string.
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

/// Plain `String` storage, for hosts that already hold the field value.
///
/// Offsets are still chars; each edit converts to byte offsets by walking the
/// string, so prefer `EditorRope` for large documents.
impl TextBuffer for String {
    fn len_chars(&self) -> usize {
        self.chars().count()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        let byte = char_to_byte(self, char_offset);
        self.insert_str(byte, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        let start = char_to_byte(self, char_range.start);
        let end = char_to_byte(self, char_range.end);
        self.replace_range(start..end, "");
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        let start = char_to_byte(self, char_range.start);
        let end = char_to_byte(self, char_range.end);
        Some(SmolStr::new(&self[start..end]))
    }

    fn to_string(&self) -> String {
        self.clone()
    }
}

/// Convert a char offset to a byte offset, saturating at the string end.
pub(crate) fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}
