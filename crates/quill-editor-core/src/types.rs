//! Core editor types: selection ranges and edit results.

use serde::Serialize;

use crate::error::MarkupError;

/// A selection in a text buffer, measured in char offsets.
///
/// Unlike an anchor/head selection, `start` is always the lower bound. A range
/// is only meaningful against a buffer once [`SelectionRange::validate`] has
/// accepted it.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed selection (caret position).
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check `start <= end <= len_chars`.
    ///
    /// Offsets are never clamped or swapped: a reversed or overlong range is
    /// rejected so buffer splicing can't go wrong.
    pub fn validate(self, len_chars: usize) -> Result<Self, MarkupError> {
        if self.start <= self.end && self.end <= len_chars {
            Ok(self)
        } else {
            Err(MarkupError::InvalidRange {
                start: self.start,
                end: self.end,
                len: len_chars,
            })
        }
    }
}

impl From<std::ops::Range<usize>> for SelectionRange {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<SelectionRange> for std::ops::Range<usize> {
    fn from(r: SelectionRange) -> Self {
        r.start..r.end
    }
}

/// Result of one editor operation: the full new buffer and where the
/// selection lands in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub buffer: String,
    pub selection: SelectionRange,
}

impl Edit {
    pub fn new(buffer: impl Into<String>, selection: SelectionRange) -> Self {
        Self {
            buffer: buffer.into(),
            selection,
        }
    }

    /// The text currently covered by the selection.
    pub fn selected_text(&self) -> &str {
        let start = crate::text::char_to_byte(&self.buffer, self.selection.start);
        let end = crate::text::char_to_byte(&self.buffer, self.selection.end);
        &self.buffer[start..end]
    }
}
