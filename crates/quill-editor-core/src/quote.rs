//! Quoting another post into a reply.

use crate::text::TextBuffer;
use crate::types::{Edit, SelectionRange};

/// The BBCode block appended for a quoted post.
pub fn quote_block(author: &str, body: &str) -> String {
    format!("[quote=\"{author}\"]{body}[/quote]\n\n")
}

/// Append a quote of `body` by `author` to the end of `buffer`.
///
/// The caret ends up after the block, ready for the reply text.
pub fn quote_reply(buffer: &str, author: &str, body: &str) -> Edit {
    let mut out = String::with_capacity(buffer.len() + body.len() + author.len() + 21);
    out.push_str(buffer);
    out.push_str(&quote_block(author, body));
    let end = out.chars().count();
    Edit::new(out, SelectionRange::caret(end))
}

/// In-place variant of [`quote_reply`] for host buffers.
pub fn quote_into<T: TextBuffer>(buffer: &mut T, author: &str, body: &str) -> SelectionRange {
    buffer.push(&quote_block(author, body));
    SelectionRange::caret(buffer.len_chars())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorRope;

    #[test]
    fn test_quote_into_empty_reply() {
        let edit = quote_reply("", "ana", "first!");
        assert_eq!(edit.buffer, "[quote=\"ana\"]first![/quote]\n\n");
        assert_eq!(edit.selection, SelectionRange::caret(29));
    }

    #[test]
    fn test_quote_appends_after_existing_text() {
        let edit = quote_reply("I agree.\n", "bo", "x");
        assert!(edit.buffer.starts_with("I agree.\n[quote=\"bo\"]"));
        assert_eq!(edit.selection.start, edit.buffer.chars().count());
    }

    #[test]
    fn test_quote_into_rope() {
        let mut rope = EditorRope::from_str("hi ");
        let caret = quote_into(&mut rope, "zoë", "ok");
        assert_eq!(
            TextBuffer::to_string(&rope),
            "hi [quote=\"zoë\"]ok[/quote]\n\n"
        );
        assert_eq!(caret, SelectionRange::caret(rope.len_chars()));
    }
}
